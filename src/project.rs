//! Record projection into substitution contexts.
//!
//! Each active record is projected into flat string-to-string mappings: a specs
//! context shared by both template roles, plus a role-specific context for the
//! highlight or a content entry. Every value is stringified here so no raw
//! numeric ever reaches the renderer.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::record::Record;

/// Flat placeholder-to-replacement mapping for one substitution pass
pub type Context = BTreeMap<String, String>;

/// Record fields projected into the specs context, with their placeholder
/// tokens. The `KM` token reads the `Km` column.
const SPEC_FIELDS: &[(&str, &str)] = &[
    ("Brand", "Brand"),
    ("Model", "Model"),
    ("year", "year"),
    ("KM", "Km"),
    ("Address", "Address"),
];

/// Build the item-specification context for a record.
///
/// Whole-valued numeric cells render as integer strings (2010.0 becomes
/// "2010"); text cells pass through literally.
pub fn specs_context(record: &Record) -> Result<Context> {
    let mut ctx = Context::new();
    for (token, field) in SPEC_FIELDS {
        ctx.insert((*token).to_string(), record.display(field)?);
    }
    Ok(ctx)
}

/// Build the highlight-role context for the top-priority record
pub fn highlight_context(record: &Record) -> Result<Context> {
    let id = record.integer("ID")?;
    let folder = record.display("Link_to_folder")?;
    let mut ctx = Context::new();
    ctx.insert("NEWS_HIGHLIGHT_TITLE".into(), format!("ID: {}", id));
    ctx.insert("HIGHLIGHT_LINK".into(), folder.clone());
    ctx.insert("HIGHLIGHT_IMAGE".into(), embed_image_link(&record.display("Link_to_pic")?));
    ctx.insert("HIGHLIGHT_TEXT".into(), record.display("Comentarios")?);
    // Secondary call-to-action reuses the folder link
    ctx.insert("HIGHLIGHT_FOLDER_LINK".into(), folder);
    Ok(ctx)
}

/// Build the content-role context for a non-highlight record.
///
/// `ordinal` is the record's 0-based position among content records after
/// filtering and sorting, not its row number in the original source.
pub fn content_context(record: &Record, ordinal: usize) -> Result<Context> {
    let id = record.integer("ID")?;
    let folder = record.display("Link_to_folder")?;
    let mut ctx = Context::new();
    ctx.insert(
        "NEWS_HIGHLIGHT_TITLE".into(),
        format!("Offer: {}   ID: {}", ordinal, id),
    );
    ctx.insert("HIGHLIGHT_LINK".into(), folder.clone());
    ctx.insert("HIGHLIGHT_IMAGE".into(), embed_image_link(&record.display("Link_to_pic")?));
    ctx.insert("HIGHLIGHT_TEXT".into(), record.display("Comentarios")?);
    ctx.insert("HIGHLIGHT_FOLDER_LINK".into(), folder);
    Ok(ctx)
}

/// Rewrite a cloud-storage share link into its inline-preview form.
///
/// Share links carry `open?id`, which browsers render as a viewer page rather
/// than an embeddable image; `uc?export=view&id` serves the raw image. The
/// rewrite is a literal substring substitution and is idempotent: once
/// rewritten, the pattern no longer matches.
pub fn embed_image_link(url: &str) -> String {
    url.replace("open?id", "uc?export=view&id")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NewsgenError;

    fn sample_record() -> Record {
        let mut r = Record::new();
        r.set("ID", 42.0);
        r.set("Brand", "Opel");
        r.set("Model", "Corsa");
        r.set("year", 2010.0);
        r.set("Km", 125000.0);
        r.set("Address", "Lisboa");
        r.set("Link_to_folder", "https://drive.example.com/folder/abc");
        r.set("Link_to_pic", "https://drive.example.com/open?id=xyz");
        r.set("Comentarios", "Great condition");
        r
    }

    #[test]
    fn test_specs_context_collapses_whole_numerics() {
        let ctx = specs_context(&sample_record()).unwrap();
        assert_eq!(ctx["year"], "2010");
        assert_eq!(ctx["KM"], "125000");
        assert_eq!(ctx["Brand"], "Opel");
    }

    #[test]
    fn test_specs_context_missing_field_fails() {
        let mut partial = Record::new();
        partial.set("Brand", "Opel");
        let err = specs_context(&partial).unwrap_err();
        assert!(matches!(err, NewsgenError::MissingField { .. }));
    }

    #[test]
    fn test_highlight_title_carries_integer_id() {
        let ctx = highlight_context(&sample_record()).unwrap();
        assert_eq!(ctx["NEWS_HIGHLIGHT_TITLE"], "ID: 42");
    }

    #[test]
    fn test_content_title_uses_post_sort_ordinal() {
        let ctx = content_context(&sample_record(), 0).unwrap();
        assert_eq!(ctx["NEWS_HIGHLIGHT_TITLE"], "Offer: 0   ID: 42");
        let ctx = content_context(&sample_record(), 1).unwrap();
        assert_eq!(ctx["NEWS_HIGHLIGHT_TITLE"], "Offer: 1   ID: 42");
    }

    #[test]
    fn test_image_link_rewritten_in_both_roles() {
        let record = sample_record();
        let highlight = highlight_context(&record).unwrap();
        let content = content_context(&record, 0).unwrap();
        assert_eq!(highlight["HIGHLIGHT_IMAGE"], "https://drive.example.com/uc?export=view&id=xyz");
        assert_eq!(highlight["HIGHLIGHT_IMAGE"], content["HIGHLIGHT_IMAGE"]);
    }

    #[test]
    fn test_image_rewrite_is_idempotent() {
        let once = embed_image_link("https://d.example.com/open?id=1");
        let twice = embed_image_link(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_folder_link_duplicated_for_secondary_cta() {
        let ctx = highlight_context(&sample_record()).unwrap();
        assert_eq!(ctx["HIGHLIGHT_LINK"], ctx["HIGHLIGHT_FOLDER_LINK"]);
    }
}
