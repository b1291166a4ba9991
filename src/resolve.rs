//! Default-value resolution: tag precedence by mode, then directory
//! placeholder expansion.
//!
//! ```text
//! Release:  release_default → default → ""
//! Dev:      dev_default     → default → ""
//! ```
//!
//! The selected string is then scanned for `$CONFDIR`/`${CONFDIR}` and
//! `$IDENTITYDIR`/`${IDENTITYDIR}`. Other `$NAME` tokens pass through
//! unchanged. A recognised placeholder with no configured directory is an
//! error rather than an empty substitution, since an empty path would turn
//! `$CONFDIR/app.log` into `/app.log`.

use std::path::PathBuf;

use crate::error::BindError;
use crate::name::FieldPath;
use crate::options::{BindOptions, DirOption, DirStyle};
use crate::types::{FieldTags, Mode, Placeholder};

/// Pick the raw default for `mode`. Missing tags mean the empty string.
pub fn select_default(tags: &FieldTags, mode: Mode) -> &'static str {
    let mode_specific = match mode {
        Mode::Release => tags.release_default,
        Mode::Dev => tags.dev_default,
    };
    mode_specific.or(tags.default).unwrap_or("")
}

/// Full resolution for the leaf at `path`: selection plus expansion.
pub fn resolve(
    tags: &FieldTags,
    path: &FieldPath,
    options: &BindOptions,
) -> Result<String, BindError> {
    let raw = select_default(tags, options.get_mode());
    expand_placeholders(raw, path, options)
}

/// Replace directory placeholders in `raw` for the leaf at `path`.
pub fn expand_placeholders(
    raw: &str,
    path: &FieldPath,
    options: &BindOptions,
) -> Result<String, BindError> {
    if !raw.contains('$') {
        return Ok(raw.to_string());
    }

    let lookup = |var: &str| -> Result<Option<String>, Placeholder> {
        let Some(placeholder) = Placeholder::from_var(var) else {
            return Ok(None);
        };
        let dir = options.dir(placeholder).ok_or(placeholder)?;
        let resolved = directory_for(dir, path).display().to_string();
        tracing::trace!(flag = %path, %placeholder, value = %resolved, "substituted placeholder");
        Ok(Some(resolved))
    };

    let expanded = shellexpand::env_with_context(raw, lookup).map_err(|e| {
        BindError::MissingDirectory {
            name: path.encode(),
            placeholder: e.cause,
        }
    })?;

    Ok(expanded.into_owned())
}

/// The directory a placeholder resolves to for the leaf at `path`.
///
/// Nested style appends one encoded segment per enclosing level, array
/// indices included, so each element of `[Peer; 3]` gets its own directory.
pub fn directory_for(dir: &DirOption, path: &FieldPath) -> PathBuf {
    match dir.style {
        DirStyle::Flat => dir.path.clone(),
        DirStyle::Nested => path
            .parent()
            .iter()
            .fold(dir.path.clone(), |acc, segment| acc.join(segment.encode())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::Segment;
    use rstest::rstest;
    use std::path::Path;

    const BOTH: FieldTags = FieldTags {
        default: Some("base"),
        release_default: Some("rel"),
        dev_default: Some("dev"),
    };
    const DEFAULT_ONLY: FieldTags = FieldTags {
        default: Some("base"),
        release_default: None,
        dev_default: None,
    };
    const DEV_ONLY: FieldTags = FieldTags {
        default: None,
        release_default: None,
        dev_default: Some("dev"),
    };

    #[rstest]
    #[case(BOTH, Mode::Release, "rel")]
    #[case(BOTH, Mode::Dev, "dev")]
    #[case(DEFAULT_ONLY, Mode::Release, "base")]
    #[case(DEFAULT_ONLY, Mode::Dev, "base")]
    #[case(DEV_ONLY, Mode::Release, "")]
    #[case(DEV_ONLY, Mode::Dev, "dev")]
    #[case(FieldTags::NONE, Mode::Release, "")]
    #[case(FieldTags::NONE, Mode::Dev, "")]
    fn tag_precedence(#[case] tags: FieldTags, #[case] mode: Mode, #[case] expected: &str) {
        assert_eq!(select_default(&tags, mode), expected);
    }

    fn path(segments: &[Segment]) -> FieldPath {
        segments.iter().copied().collect()
    }

    #[test]
    fn text_without_placeholders_is_untouched() {
        let p = path(&[Segment::Named("name")]);
        let out = expand_placeholders("plain text", &p, &BindOptions::new()).unwrap();
        assert_eq!(out, "plain text");
    }

    #[test]
    fn flat_conf_dir_ignores_depth() {
        let options = BindOptions::new().conf_dir("confpath");
        let p = path(&[
            Segment::Named("my_struct1"),
            Segment::Named("my_struct2"),
            Segment::Named("string"),
        ]);
        let out = expand_placeholders("2${CONFDIR}3", &p, &options).unwrap();
        assert_eq!(out, "2confpath3");
    }

    #[test]
    fn both_placeholder_spellings_expand() {
        let options = BindOptions::new().conf_dir("c");
        let p = path(&[Segment::Named("s")]);
        let out = expand_placeholders("$CONFDIR/${CONFDIR}", &p, &options).unwrap();
        assert_eq!(out, "c/c");
    }

    #[test]
    fn nested_conf_dir_appends_enclosing_fields() {
        let options = BindOptions::new().conf_dir_nested("confpath");
        let p = path(&[
            Segment::Named("my_struct1"),
            Segment::Named("my_struct2"),
            Segment::Named("string"),
        ]);
        let out = expand_placeholders("${CONFDIR}", &p, &options).unwrap();
        let expected = Path::new("confpath").join("my-struct1").join("my-struct2");
        assert_eq!(out, expected.display().to_string());
    }

    #[test]
    fn nested_conf_dir_at_root_is_the_root() {
        let options = BindOptions::new().conf_dir_nested("confpath");
        let p = path(&[Segment::Named("string")]);
        let out = expand_placeholders("-$CONFDIR+", &p, &options).unwrap();
        assert_eq!(out, "-confpath+");
    }

    #[test]
    fn nested_dir_includes_array_index() {
        let dir = DirOption {
            path: PathBuf::from("root"),
            style: DirStyle::Nested,
        };
        let p = path(&[
            Segment::Named("peers"),
            Segment::Index { index: 1, len: 3 },
            Segment::Named("cert"),
        ]);
        assert_eq!(
            directory_for(&dir, &p),
            Path::new("root").join("peers").join("01")
        );
    }

    #[test]
    fn identity_dir_expands_independently() {
        let options = BindOptions::new().conf_dir("conf").identity_dir("ids");
        let p = path(&[Segment::Named("key")]);
        let out = expand_placeholders("$IDENTITYDIR|$CONFDIR", &p, &options).unwrap();
        assert_eq!(out, "ids|conf");
    }

    #[test]
    fn missing_conf_dir_is_an_error() {
        let p = path(&[Segment::Named("log"), Segment::Named("path")]);
        let err = expand_placeholders("$CONFDIR/app.log", &p, &BindOptions::new()).unwrap_err();
        match err {
            BindError::MissingDirectory { name, placeholder } => {
                assert_eq!(name, "log.path");
                assert_eq!(placeholder, Placeholder::ConfDir);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unrecognised_variables_pass_through() {
        let options = BindOptions::new().conf_dir("conf");
        let p = path(&[Segment::Named("s")]);
        let out = expand_placeholders("$CONFDIRX:$HOME:$CONFDIR", &p, &options).unwrap();
        assert_eq!(out, "$CONFDIRX:$HOME:conf");
    }

    #[test]
    fn resolve_selects_then_expands() {
        let tags = FieldTags {
            default: Some("$CONFDIR/base"),
            release_default: None,
            dev_default: Some("$CONFDIR/dev"),
        };
        let p = path(&[Segment::Named("path")]);
        let options = BindOptions::new().dev_defaults().conf_dir("c");
        assert_eq!(resolve(&tags, &p, &options).unwrap(), "c/dev");
        let options = options.release_defaults();
        assert_eq!(resolve(&tags, &p, &options).unwrap(), "c/base");
    }
}
