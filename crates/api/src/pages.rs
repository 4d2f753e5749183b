//! Minimal HTML shells for the page routes.
//!
//! Each page carries the markup and data the browser scripts under
//! `/static/js/` expect (`window.frameData`, `data-*` attributes, element
//! ids); the scripts and styles themselves are served separately.

use serde::Serialize;

use ordinal_frame_core::error::CoreError;
use ordinal_frame_core::inscription::Inscription;

const APP_TITLE: &str = "Ordinal Frame";

/// `window.frameData` on the frame page.
#[derive(Serialize)]
struct FrameData<'a> {
    ordinals: &'a [Inscription],
}

/// Landing page.
pub fn index() -> String {
    layout(
        "Home",
        "",
        r#"<main class="landing">
  <h1>Ordinal Frame</h1>
  <p>Display the image inscriptions held by a Bitcoin address.</p>
  <nav><a href="/setup">Set up</a> <a href="/select">Choose ordinals</a> <a href="/frame">Open frame</a></nav>
</main>"#,
        None,
    )
}

/// Address entry page. The form is driven by `setup.js`.
pub fn setup() -> String {
    layout(
        "Setup",
        "",
        r#"<main class="setup">
  <h1>Connect a wallet address</h1>
  <form id="addressForm">
    <input id="addressInput" name="address" placeholder="bc1p..." autocomplete="off" required>
    <button type="submit">Fetch ordinals</button>
  </form>
  <div id="result"></div>
</main>"#,
        Some("setup.js"),
    )
}

/// Selection page with every stored image inscription and the current picks.
///
/// `select.js` reads `data-ordinals` and `data-selected-ids` from `<body>` and
/// binds the buttons and `.ordinal-card[data-id]` elements rendered here.
pub fn select(ordinals: &[Inscription], selected_ids: &[String]) -> Result<String, CoreError> {
    let ordinals_json = escape_html(&serde_json::to_string(ordinals)?);
    let selected_json = escape_html(&serde_json::to_string(selected_ids)?);

    let cards: String = ordinals
        .iter()
        .map(|ordinal| ordinal_card(ordinal, selected_ids.contains(&ordinal.id)))
        .collect();

    let count = ordinals.len();
    let body = format!(
        r#"<main class="select">
  <h1>Choose ordinals</h1>
  <div class="selection-stats">
    <span><span id="imageCount">{count}</span> images</span>
    <span><span id="totalCount">{count}</span> available</span>
    <span><span id="selectedCount">{selected}</span> selected</span>
  </div>
  <div class="selection-controls">
    <button type="button" id="selectAllBtn">Select all</button>
    <button type="button" id="selectNoneBtn">Select none</button>
    <button type="button" id="selectRareBtn">Select rare</button>
  </div>
  <div id="ordinalsGrid" class="ordinals-grid">
{cards}  </div>
  <button type="button" id="saveButton"><span id="saveButtonText">Save Selection</span></button>
  <div id="resultMessage" class="result-message" style="display: none"></div>
</main>"#,
        selected = selected_ids.len(),
    );

    let body_attrs = format!(
        r#" data-ordinals="{ordinals_json}" data-selected-ids="{selected_json}""#
    );
    Ok(layout("Select", &body_attrs, &body, Some("select.js")))
}

/// Slideshow page for the selected inscriptions.
///
/// `frame.js` takes the list from `window.frameData`, the interval from
/// `data-slideshow-interval`, and fills the metadata overlay by element id.
pub fn frame(ordinals: &[Inscription], slideshow_interval: u64) -> Result<String, CoreError> {
    let data = script_json(&FrameData { ordinals })?;

    let body = format!(
        r#"<div id="loadingState" class="loading-state">Loading...</div>
<div id="errorState" class="error-state" style="display: none">
  <p>No ordinals to display.</p>
  <a href="/setup">Set up</a>
</div>
<div id="ordinalContainer" class="ordinal-container"></div>
<div id="metadataOverlay" class="metadata-overlay">
  <h2 id="inscriptionNumber"></h2>
  <p id="inscriptionId" class="inscription-id"></p>
  <p id="collectionInfo"></p>
  <span id="rarityBadge" class="rarity-badge"></span>
</div>
<div id="navIndicators" class="nav-indicators"></div>
<div class="frame-controls">
  <button type="button" id="playPauseBtn">&#x23F8;&#xFE0F;</button>
  <span id="slideshowIndicator" class="slideshow-indicator"></span>
</div>
<script>window.frameData = {data};</script>"#
    );

    let body_attrs = format!(r#" data-slideshow-interval="{slideshow_interval}""#);
    Ok(layout("Frame", &body_attrs, &body, Some("frame.js")))
}

/// One selectable card on the selection page.
fn ordinal_card(ordinal: &Inscription, selected: bool) -> String {
    let (card_class, checkbox_class) = if selected {
        ("ordinal-card selected", "selection-checkbox checked")
    } else {
        ("ordinal-card", "selection-checkbox")
    };
    let id = escape_html(&ordinal.id);
    let rarity = escape_html(&ordinal.sat_rarity);
    let number = ordinal.number;

    format!(
        r#"    <div class="{card_class}" data-id="{id}">
      <div class="{checkbox_class}"></div>
      <img src="/content/{id}" alt="Inscription #{number}" loading="lazy">
      <div class="ordinal-info">
        <span class="ordinal-number">#{number}</span>
        <span class="rarity-badge rarity-{rarity}">{rarity}</span>
      </div>
    </div>
"#
    )
}

/// Page for unknown routes.
pub fn not_found() -> String {
    layout(
        "Not found",
        "",
        r#"<main class="error"><h1>404</h1><p>Page not found.</p><a href="/">Home</a></main>"#,
        None,
    )
}

fn layout(title: &str, body_attrs: &str, body: &str, script: Option<&str>) -> String {
    let script_tag = script
        .map(|name| format!(r#"<script src="/static/js/{name}" defer></script>"#))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} - {APP_TITLE}</title>
<link rel="stylesheet" href="/static/css/style.css">
{script_tag}
</head>
<body{body_attrs}>
{body}
</body>
</html>
"#
    )
}

/// Serialize `value` for inline embedding inside a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String, CoreError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Escape text for an HTML attribute value or element body.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
