//! Run orchestration.
//!
//! One run is strictly sequential: archive previous outputs, load source,
//! filter and sort, project, render header, render highlight, render each
//! content record in order, compose, persist. Any error aborts the whole run;
//! outputs are promoted to their final timestamped names only at the very end.

use chrono::{DateTime, Local};

use crate::compose::compose;
use crate::error::Result;
use crate::pipeline::{select_and_order, Selection};
use crate::project::{content_context, highlight_context, specs_context, Context};
use crate::record::Settings;
use crate::render::{render, FragmentBuffer};
use crate::sink::Sink;
use crate::source::DataSource;
use crate::store::TemplateStore;

/// Header date fallback format used when the settings date is blank
const GENERATED_DATE_FORMAT: &str = "%A,  %d de %B  %Y";

/// Outcome of a successful run
#[derive(Debug)]
pub struct RunSummary {
    /// Identifier of the record rendered as the highlight
    pub highlight_id: i64,
    /// Number of content records rendered
    pub content_count: usize,
    /// Promoted output paths, document first
    pub outputs: Vec<std::path::PathBuf>,
}

/// Execute one newsletter run end to end.
///
/// `now` is the single clock instant for the run: it feeds both the generated
/// header date (when the settings date is blank) and the archival timestamp.
pub fn generate(
    source: &dyn DataSource,
    store: &TemplateStore,
    sink: &Sink,
    now: DateTime<Local>,
) -> Result<RunSummary> {
    sink.archive_previous()?;

    let settings = source.settings()?;
    let templates = store.load()?;
    let ordered = select_and_order(source.records()?)?;
    let selection = Selection::from_ordered(ordered)?;
    let highlight_id = selection.highlight.integer("ID")?;
    tracing::info!(
        highlight_id,
        content = selection.content.len(),
        "rendering newsletter"
    );

    // Header
    let header_fragment = render(&templates.header, &[&header_config(&settings, now)]);
    sink.write_header(&header_fragment)?;

    // Highlight: role context first, then specs, per the renderer contract
    let highlight_fragment = render(
        &templates.highlight,
        &[
            &highlight_context(&selection.highlight)?,
            &specs_context(&selection.highlight)?,
        ],
    );
    sink.write_highlight(&highlight_fragment)?;

    // Content: accumulate fragments in record order
    let mut content = FragmentBuffer::new();
    for (ordinal, record) in selection.content.iter().enumerate() {
        let role_ctx = content_context(record, ordinal)?;
        let spec_ctx = specs_context(record)?;
        let contexts = [&role_ctx, &spec_ctx];
        let fragment = render(&templates.content, &contexts);
        sink.append_content(&fragment)?;
        content.append(&templates.content, &contexts);
    }
    if content.is_empty() {
        // keep the working file present so promotion renames a full set
        sink.append_content("")?;
    }

    let document = compose(
        &templates.document,
        &header_fragment,
        &highlight_fragment,
        content.as_str(),
        &contacts(&settings),
    );
    sink.write_document(&document)?;

    let outputs = sink.promote(now)?;
    Ok(RunSummary {
        highlight_id,
        content_count: selection.content.len(),
        outputs,
    })
}

/// Header substitution context; a blank settings date falls back to a date
/// generated from the run clock.
fn header_config(settings: &Settings, now: DateTime<Local>) -> Context {
    let date = settings
        .date
        .clone()
        .unwrap_or_else(|| now.format(GENERATED_DATE_FORMAT).to_string());
    let mut ctx = Context::new();
    ctx.insert("LOGO".into(), settings.logo.clone());
    ctx.insert("NEWSLETTER_IMAGE".into(), settings.banner.clone());
    ctx.insert("NEWSLETTER_DATE".into(), date);
    ctx
}

/// Contacts mapping for document composition; values are strings already, so
/// substitution never sees a raw numeric.
fn contacts(settings: &Settings) -> Context {
    let mut ctx = Context::new();
    ctx.insert("TELEPHONE_NUMBER".into(), settings.phone.clone());
    ctx.insert("EMAIL_LINK".into(), settings.email.clone());
    ctx.insert("EMAIL_DISPLAY".into(), settings.email.clone());
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn settings(date: Option<&str>) -> Settings {
        Settings {
            logo: "logo.png".into(),
            banner: "banner.png".into(),
            date: date.map(str::to_string),
            phone: "555".into(),
            email: "a@b.com".into(),
        }
    }

    #[test]
    fn test_header_config_uses_settings_date_when_present() {
        let now = Local.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let ctx = header_config(&settings(Some("1 de Janeiro")), now);
        assert_eq!(ctx["NEWSLETTER_DATE"], "1 de Janeiro");
    }

    #[test]
    fn test_header_config_generates_date_when_blank() {
        let now = Local.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let ctx = header_config(&settings(None), now);
        assert_eq!(ctx["NEWSLETTER_DATE"], "Thursday,  01 de February  2024");
    }

    #[test]
    fn test_contacts_are_flat_strings() {
        let ctx = contacts(&settings(None));
        assert_eq!(ctx["TELEPHONE_NUMBER"], "555");
        assert_eq!(ctx["EMAIL_LINK"], "a@b.com");
        assert_eq!(ctx["EMAIL_DISPLAY"], "a@b.com");
    }
}
