//! Config derive: turns a struct definition into a field visitor.

use proc_macro2::TokenStream;
use quote::quote;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, Lit, Token};

/// Default-value attributes of one field.
#[derive(Debug, Default)]
struct FieldAttrs {
    default: Option<String>,
    release_default: Option<String>,
    dev_default: Option<String>,
    skip: bool,
}

pub fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Config requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Config can only be derived for structs",
            ));
        }
    };

    let mut visits = Vec::new();
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let field_name = ident.to_string();
        let default = option_tokens(attrs.default.as_deref());
        let release_default = option_tokens(attrs.release_default.as_deref());
        let dev_default = option_tokens(attrs.dev_default.as_deref());
        visits.push(quote! {
            ::cfgstruct::Node::visit_node(
                &mut self.#ident,
                walker,
                #field_name,
                ::cfgstruct::FieldTags {
                    default: #default,
                    release_default: #release_default,
                    dev_default: #dev_default,
                },
            )?;
        });
    }

    Ok(quote! {
        impl #impl_generics ::cfgstruct::Config for #name #ty_generics #where_clause {
            fn visit<'__cfg>(
                &'__cfg mut self,
                walker: &mut ::cfgstruct::Walker<'__cfg, '_>,
            ) -> ::core::result::Result<(), ::cfgstruct::BindError> {
                #(#visits)*
                ::core::result::Result::Ok(())
            }
        }

        impl #impl_generics ::cfgstruct::Node for #name #ty_generics #where_clause {
            fn visit_node<'__cfg>(
                &'__cfg mut self,
                walker: &mut ::cfgstruct::Walker<'__cfg, '_>,
                name: &'static str,
                _tags: ::cfgstruct::FieldTags,
            ) -> ::core::result::Result<(), ::cfgstruct::BindError> {
                walker.nested(name, self)
            }
        }
    })
}

fn option_tokens(value: Option<&str>) -> TokenStream {
    match value {
        Some(v) => quote! { ::core::option::Option::Some(#v) },
        None => quote! { ::core::option::Option::None },
    }
}

fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("config")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                set_once(&mut out.default, &meta)
            } else if meta.path.is_ident("release_default") {
                set_once(&mut out.release_default, &meta)
            } else if meta.path.is_ident("dev_default") {
                set_once(&mut out.dev_default, &meta)
            } else if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else {
                Err(meta.error(
                    "unknown config attribute, expected `default`, `release_default`, `dev_default` or `skip`",
                ))
            }
        })?;
    }
    Ok(out)
}

fn set_once(slot: &mut Option<String>, meta: &ParseNestedMeta) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate default attribute"));
    }
    *slot = Some(literal_value(meta)?);
    Ok(())
}

/// Read `= <lit>` as text. Negative numbers are accepted.
fn literal_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let input = meta.value()?;
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let lit: Lit = input.parse()?;
    let text = match &lit {
        Lit::Str(s) if !negative => s.value(),
        Lit::Bool(b) if !negative => b.value.to_string(),
        Lit::Int(i) => i.base10_digits().to_string(),
        Lit::Float(f) => f.base10_digits().to_string(),
        _ => {
            return Err(syn::Error::new_spanned(
                lit,
                "expected a string, integer, float or bool literal",
            ));
        }
    };
    Ok(if negative { format!("-{text}") } else { text })
}
