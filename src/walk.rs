//! Depth-first traversal of a config struct.
//!
//! The shape of a config is described statically: `#[derive(Config)]`
//! implements [`Config`] for the struct and [`Node`] for the struct when used
//! as a field. Leaf types and fixed-size arrays get their [`Node`] impls here.
//! A field type without a [`Node`] impl (`Vec`, `Option`, maps) does not
//! compile, so an unsupported field can never be skipped silently.
//!
//! Traversal order is declaration order, array elements ascending.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::BindError;
use crate::name::{FieldPath, Segment};
use crate::slot::Slot;
use crate::types::FieldTags;

/// A struct whose fields can be bound to flags.
///
/// Usually derived. A hand-written impl visits each field in order:
///
/// ```ignore
/// impl Config for Server {
///     fn visit<'a>(&'a mut self, walker: &mut Walker<'a, '_>) -> Result<(), BindError> {
///         self.port.visit_node(walker, "port", FieldTags { default: Some("8080"), ..FieldTags::NONE })?;
///         self.tls.visit_node(walker, "tls", FieldTags::NONE)
///     }
/// }
/// ```
pub trait Config {
    fn visit<'a>(&'a mut self, walker: &mut Walker<'a, '_>) -> Result<(), BindError>;
}

/// A field as seen from the struct that declares it.
pub trait Node {
    fn visit_node<'a>(
        &'a mut self,
        walker: &mut Walker<'a, '_>,
        name: &'static str,
        tags: FieldTags,
    ) -> Result<(), BindError>;
}

type LeafFn<'a, 'f> = dyn FnMut(&FieldPath, &FieldTags, Slot<'a>) -> Result<(), BindError> + 'f;

/// Tracks the current path and hands every leaf to a callback.
pub struct Walker<'a, 'f> {
    path: FieldPath,
    on_leaf: &'f mut LeafFn<'a, 'f>,
}

impl<'a> Walker<'a, '_> {
    /// Emit a leaf field.
    pub fn leaf(
        &mut self,
        name: &'static str,
        tags: FieldTags,
        slot: Slot<'a>,
    ) -> Result<(), BindError> {
        self.path.push(Segment::Named(name));
        let result = (self.on_leaf)(&self.path, &tags, slot);
        self.path.pop();
        result
    }

    /// Descend into a nested struct field.
    pub fn nested<C: Config + ?Sized>(
        &mut self,
        name: &'static str,
        child: &'a mut C,
    ) -> Result<(), BindError> {
        self.path.push(Segment::Named(name));
        let result = child.visit(self);
        self.path.pop();
        result
    }

    /// Descend into every element of a fixed-size array field.
    pub fn array<C: Config>(
        &mut self,
        name: &'static str,
        items: &'a mut [C],
    ) -> Result<(), BindError> {
        let len = items.len();
        self.path.push(Segment::Named(name));
        let mut result = Ok(());
        for (index, item) in items.iter_mut().enumerate() {
            self.path.push(Segment::Index { index, len });
            result = item.visit(self);
            self.path.pop();
            if result.is_err() {
                break;
            }
        }
        self.path.pop();
        result
    }
}

/// Visit every leaf of `root` in declaration order.
///
/// Stops at the first error returned by `on_leaf`.
pub fn walk<'a, C, F>(root: &'a mut C, mut on_leaf: F) -> Result<(), BindError>
where
    C: Config + ?Sized,
    F: FnMut(&FieldPath, &FieldTags, Slot<'a>) -> Result<(), BindError>,
{
    let mut walker = Walker {
        path: FieldPath::new(),
        on_leaf: &mut on_leaf,
    };
    root.visit(&mut walker)
}

impl<T: Config, const N: usize> Node for [T; N] {
    fn visit_node<'a>(
        &'a mut self,
        walker: &mut Walker<'a, '_>,
        name: &'static str,
        _tags: FieldTags,
    ) -> Result<(), BindError> {
        walker.array(name, self)
    }
}

macro_rules! leaf_nodes {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl Node for $ty {
            fn visit_node<'a>(
                &'a mut self,
                walker: &mut Walker<'a, '_>,
                name: &'static str,
                tags: FieldTags,
            ) -> Result<(), BindError> {
                walker.leaf(name, tags, Slot::$variant(self))
            }
        }
    )*};
}

leaf_nodes! {
    bool => Bool,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Duration => Duration,
    String => String,
    PathBuf => Path,
}
