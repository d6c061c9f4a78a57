//! Static catalogs mapping GTM internal function ids to friendly names.
//!
//! GTM identifies every tag, variable (macro), and trigger listener by a short
//! internal id (e.g. `gaawe`, `k`, `cl`). These tables are reverse-engineered
//! from published container scripts; they are plain data, loaded once and
//! never mutated.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The fixed set of tag categories used for the `byCategory` rollup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagCategory {
    Google,
    Custom,
    Analytics,
    Advertising,
    Marketing,
    Social,
    Affiliate,
    Feedback,
    Testing,
    Chat,
    Content,
    Personalization,
    Other,
}

impl TagCategory {
    /// Display name used in reports and the UI layer.
    pub fn display_name(&self) -> &'static str {
        match self {
            TagCategory::Google => "Google",
            TagCategory::Custom => "Custom",
            TagCategory::Analytics => "Analytics",
            TagCategory::Advertising => "Advertising",
            TagCategory::Marketing => "Marketing",
            TagCategory::Social => "Social Media",
            TagCategory::Affiliate => "Affiliate",
            TagCategory::Feedback => "Feedback",
            TagCategory::Testing => "A/B Testing",
            TagCategory::Chat => "Chat",
            TagCategory::Content => "Content",
            TagCategory::Personalization => "Personalization",
            TagCategory::Other => "Other",
        }
    }
}

/// A known GTM tag type: internal id, friendly name, and category.
#[derive(Debug)]
pub struct CatalogTag {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TagCategory,
}

/// Known tag types, indexed by the bare function id (leading `__` stripped).
pub static TAG_CATALOG: &[CatalogTag] = &[
    // Google tags
    CatalogTag { id: "googtag", name: "Google Tag", category: TagCategory::Google },
    CatalogTag { id: "ga", name: "Google Analytics (Legacy)", category: TagCategory::Google },
    CatalogTag { id: "ua", name: "Universal Analytics", category: TagCategory::Google },
    CatalogTag { id: "gaawe", name: "Google Analytics 4", category: TagCategory::Google },
    CatalogTag { id: "awct", name: "Google Ads Conversion", category: TagCategory::Google },
    CatalogTag { id: "sp", name: "Google Ads Remarketing", category: TagCategory::Google },
    CatalogTag { id: "flc", name: "Floodlight Counter", category: TagCategory::Google },
    CatalogTag { id: "fls", name: "Floodlight Sales", category: TagCategory::Google },
    CatalogTag { id: "ts", name: "Google Trusted Stores", category: TagCategory::Google },
    CatalogTag { id: "gcs", name: "Google Consumer Surveys", category: TagCategory::Google },
    CatalogTag { id: "gclidw", name: "Google Ads Conversion Linker", category: TagCategory::Google },
    CatalogTag { id: "gaawc", name: "Google Tag (GA4)", category: TagCategory::Google },
    // Custom tags
    CatalogTag { id: "html", name: "Custom HTML", category: TagCategory::Custom },
    CatalogTag { id: "img", name: "Custom Image", category: TagCategory::Custom },
    // Analytics tags
    CatalogTag { id: "cegg", name: "Crazy Egg", category: TagCategory::Analytics },
    CatalogTag { id: "mf", name: "Mouseflow", category: TagCategory::Analytics },
    CatalogTag { id: "vdc", name: "VisualDNA", category: TagCategory::Analytics },
    CatalogTag { id: "tdc", name: "Turn Data Collection", category: TagCategory::Analytics },
    CatalogTag { id: "tc", name: "Turn Conversion", category: TagCategory::Analytics },
    CatalogTag { id: "placedPixel", name: "Placed", category: TagCategory::Analytics },
    CatalogTag { id: "ndcr", name: "Nielsen DCR", category: TagCategory::Analytics },
    CatalogTag { id: "ljs", name: "Lytics JS", category: TagCategory::Analytics },
    CatalogTag { id: "k50Init", name: "K50", category: TagCategory::Analytics },
    CatalogTag { id: "infinity", name: "Infinity Call", category: TagCategory::Analytics },
    CatalogTag { id: "hjtc", name: "Hotjar", category: TagCategory::Analytics },
    CatalogTag { id: "fxm", name: "FoxMetrics", category: TagCategory::Analytics },
    CatalogTag { id: "cts", name: "ClickTale", category: TagCategory::Analytics },
    CatalogTag { id: "csm", name: "comScore", category: TagCategory::Analytics },
    CatalogTag { id: "adm", name: "Adometry", category: TagCategory::Analytics },
    // Social media tags
    CatalogTag { id: "pntr", name: "Pinterest", category: TagCategory::Social },
    CatalogTag { id: "twitter_website_tag", name: "Twitter Website Tag", category: TagCategory::Social },
    CatalogTag { id: "bzi", name: "LinkedIn Insight", category: TagCategory::Social },
    CatalogTag { id: "okt", name: "Oktopost", category: TagCategory::Social },
    CatalogTag { id: "shareaholic", name: "Shareaholic", category: TagCategory::Social },
    // Advertising tags
    CatalogTag { id: "fbq", name: "Facebook Pixel", category: TagCategory::Advertising },
    CatalogTag { id: "crto", name: "Criteo", category: TagCategory::Advertising },
    CatalogTag { id: "pa", name: "Perfect Audience", category: TagCategory::Advertising },
    CatalogTag { id: "qcm", name: "Quantcast", category: TagCategory::Advertising },
    CatalogTag { id: "qpx", name: "Quora Pixel", category: TagCategory::Advertising },
    CatalogTag { id: "sfr", name: "SearchForce Redirect", category: TagCategory::Advertising },
    CatalogTag { id: "sfl", name: "SearchForce Landing", category: TagCategory::Advertising },
    CatalogTag { id: "sfc", name: "SearchForce Conversion", category: TagCategory::Advertising },
    CatalogTag { id: "sca", name: "Intent Media", category: TagCategory::Advertising },
    CatalogTag { id: "mpr", name: "Mediaplex ROI", category: TagCategory::Advertising },
    CatalogTag { id: "mpm", name: "Mediaplex MCT", category: TagCategory::Advertising },
    CatalogTag { id: "ms", name: "Marin Software", category: TagCategory::Advertising },
    CatalogTag { id: "baut", name: "Bing Universal", category: TagCategory::Advertising },
    CatalogTag { id: "asp", name: "AdRoll Smart Pixel", category: TagCategory::Advertising },
    CatalogTag { id: "ta", name: "AdAdvisor/Neustar", category: TagCategory::Advertising },
    // Marketing tags
    CatalogTag { id: "scjs", name: "SaleCycle JS", category: TagCategory::Marketing },
    CatalogTag { id: "scp", name: "SaleCycle Pixel", category: TagCategory::Marketing },
    CatalogTag { id: "yieldify", name: "Yieldify", category: TagCategory::Marketing },
    CatalogTag { id: "xpsh", name: "Xtremepush", category: TagCategory::Marketing },
    CatalogTag { id: "vei", name: "Ve Interactive", category: TagCategory::Marketing },
    CatalogTag { id: "veip", name: "Ve Pixel", category: TagCategory::Marketing },
    CatalogTag { id: "uslt", name: "Upsellit Footer", category: TagCategory::Marketing },
    CatalogTag { id: "uspt", name: "Upsellit Confirmation", category: TagCategory::Marketing },
    CatalogTag { id: "ll", name: "LeadLab", category: TagCategory::Marketing },
    // Affiliate tags
    CatalogTag { id: "tdsc", name: "Tradedoubler Sale", category: TagCategory::Affiliate },
    CatalogTag { id: "tdlc", name: "Tradedoubler Lead", category: TagCategory::Affiliate },
    CatalogTag { id: "awj", name: "Affiliate Window", category: TagCategory::Affiliate },
    CatalogTag { id: "awc", name: "Affiliate Window Conv", category: TagCategory::Affiliate },
    // Feedback tags
    CatalogTag { id: "svw", name: "Survicate", category: TagCategory::Feedback },
    CatalogTag { id: "bb", name: "Bizrate Buyer", category: TagCategory::Feedback },
    CatalogTag { id: "bsa", name: "Bizrate Survey", category: TagCategory::Feedback },
    CatalogTag { id: "nudge", name: "Nudge", category: TagCategory::Feedback },
    // Testing tags
    CatalogTag { id: "abtGeneric", name: "AB Tasty", category: TagCategory::Testing },
    // Chat tags
    CatalogTag { id: "messagemate", name: "Message Mate", category: TagCategory::Chat },
    // Content tags
    CatalogTag { id: "dstag", name: "DistroScale", category: TagCategory::Content },
    // Personalization tags
    CatalogTag { id: "pc", name: "Personali Canvas", category: TagCategory::Personalization },
    // Other tags
    CatalogTag { id: "zone", name: "Zonas", category: TagCategory::Other },
];

static TAG_INDEX: LazyLock<HashMap<&'static str, &'static CatalogTag>> = LazyLock::new(|| {
    TAG_CATALOG.iter().map(|tag| (tag.id, tag)).collect()
});

/// Looks up a known tag by its bare function id.
pub fn tag_by_id(id: &str) -> Option<&'static CatalogTag> {
    TAG_INDEX.get(id).copied()
}

/// Reverse lookup: first catalog entry whose friendly name matches.
///
/// Used for the category rollup, where only the resolved display name is
/// available. Iterates the catalog in declaration order so the winner is
/// deterministic.
pub fn tag_by_name(name: &str) -> Option<&'static CatalogTag> {
    TAG_CATALOG.iter().find(|tag| tag.name == name)
}

/// Known macro (variable) types: bare function id to friendly name.
///
/// Includes the `ct_gtm.*` built-in variable ids observed in custom-template
/// containers.
pub static MACRO_TYPES: &[(&str, &str)] = &[
    ("k", "Primary Cookie"),
    ("v", "Auto Event Variable"),
    ("c", "Constant"),
    ("ctv", "Container Version Number"),
    ("e", "Custom Event"),
    ("jsm", "JavaScript Variable"),
    ("dbg", "Debug Mode"),
    ("d", "DOM Element"),
    ("vis", "Element Visibility"),
    ("gas", "Google Analytics Settings (legacy)"),
    ("f", "HTTP Referrer"),
    ("j", "JavaScript Variable"),
    ("smm", "Lookup Table"),
    ("r", "Random Number"),
    ("remm", "RegEx Table"),
    ("u", "URL"),
    ("gtes", "Google Tag: Event Settings"),
    ("gclid", "Google Click ID"),
    ("aw.remarketing", "Google Ads Remarketing"),
    ("flc", "First-Party Cookie"),
    ("ct", "Custom Template"),
    ("ct_js", "Custom JavaScript"),
    ("ct_http", "Custom HTTP Request"),
    ("ct_html", "Custom HTML"),
    ("ct_img", "Custom Image"),
    ("ct_ga", "Google Analytics: Universal Analytics"),
    ("ct_ga4", "Google Analytics 4"),
    ("ct_gtag", "Google Tag"),
    ("ct_gtm.click", "Click Variables"),
    ("ct_gtm.clickClasses", "Click Classes"),
    ("ct_gtm.clickId", "Click ID"),
    ("ct_gtm.clickTarget", "Click Target"),
    ("ct_gtm.clickText", "Click Text"),
    ("ct_gtm.clickURL", "Click URL"),
    ("ct_gtm.element", "Element"),
    ("ct_gtm.elementClasses", "Element Classes"),
    ("ct_gtm.elementId", "Element ID"),
    ("ct_gtm.elementTarget", "Element Target"),
    ("ct_gtm.elementText", "Element Text"),
    ("ct_gtm.elementURL", "Element URL"),
    ("ct_gtm.formClasses", "Form Classes"),
    ("ct_gtm.formElement", "Form Element"),
    ("ct_gtm.formId", "Form ID"),
    ("ct_gtm.formTarget", "Form Target"),
    ("ct_gtm.formText", "Form Text"),
    ("ct_gtm.formURL", "Form URL"),
    ("ct_gtm.historyChangeSource", "History Change Source"),
    ("ct_gtm.historyNewUrlFragment", "New URL Fragment"),
    ("ct_gtm.historyNewUrlPath", "New URL Path"),
    ("ct_gtm.historyNewUrlQueryParameters", "New URL Query Parameters"),
    ("ct_gtm.historyNewUrlScheme", "New URL Scheme"),
    ("ct_gtm.historyOldUrlFragment", "Old URL Fragment"),
    ("ct_gtm.historyOldUrlPath", "Old URL Path"),
    ("ct_gtm.historyOldUrlQueryParameters", "Old URL Query Parameters"),
    ("ct_gtm.historyOldUrlScheme", "Old URL Scheme"),
    ("ct_gtm.htmlId", "HTML ID"),
    ("ct_gtm.jsError", "JavaScript Error"),
    ("ct_gtm.jsErrorMessage", "Error Message"),
    ("ct_gtm.jsErrorUrl", "Error URL"),
    ("ct_gtm.jsErrorLine", "Error Line"),
    ("ct_gtm.jsErrorCol", "Error Column"),
    ("ct_gtm.jsErrorObject", "Error Object"),
    ("ct_gtm.jsErrorStackTrace", "Error Stack Trace"),
    ("ct_gtm.linkClasses", "Link Classes"),
    ("ct_gtm.linkId", "Link ID"),
    ("ct_gtm.linkTarget", "Link Target"),
    ("ct_gtm.linkText", "Link Text"),
    ("ct_gtm.linkUrl", "Link URL"),
    ("ct_gtm.scrollDepthThreshold", "Scroll Depth Threshold"),
    ("ct_gtm.scrollDepthUnits", "Scroll Depth Units"),
    ("ct_gtm.scrollDirection", "Scroll Direction"),
    ("ct_gtm.timerId", "Timer ID"),
    ("ct_gtm.timerInterval", "Timer Interval"),
    ("ct_gtm.timerLimit", "Timer Limit"),
    ("ct_gtm.videoCurrentTime", "Video Current Time"),
    ("ct_gtm.videoDuration", "Video Duration"),
    ("ct_gtm.videoPercent", "Video Percent"),
    ("ct_gtm.videoProvider", "Video Provider"),
    ("ct_gtm.videoStatus", "Video Status"),
    ("ct_gtm.videoTitle", "Video Title"),
    ("ct_gtm.videoUrl", "Video URL"),
    ("ct_gtm.videoVisible", "Video Visible"),
    ("ct_gtm.visibleId", "Visible ID"),
    ("ct_gtm.visiblePercentage", "Visible Percentage"),
    ("ct_gtm.visibleTime", "Visible Time"),
    ("ct_gtm.visibleThreshold", "Visible Threshold"),
    ("ct_gtm.visibleUnits", "Visible Units"),
    ("ct_gtm.window", "Window"),
    ("ct_gtm.document", "Document"),
    ("ct_gtm.navigator", "Navigator"),
    ("ct_gtm.screen", "Screen"),
    ("ct_gtm.history", "History"),
    ("ct_gtm.location", "Location"),
    ("ct_gtm.url", "URL"),
    ("ct_gtm.referrer", "Referrer"),
    ("ct_gtm.title", "Title"),
    ("ct_gtm.timestamp", "Timestamp"),
    ("ct_gtm.event", "Event"),
    ("ct_gtm.gtm", "Google Tag Manager"),
    ("ct_gtm.gtm.start", "GTM Start"),
    ("ct_gtm.gtm.js", "GTM JavaScript"),
    ("ct_gtm.gtm.dom", "GTM DOM Ready"),
    ("ct_gtm.gtm.load", "GTM Window Loaded"),
    ("ct_gtm.gtm.timer", "GTM Timer"),
    ("ct_gtm.gtm.mouse", "GTM Mouse"),
    ("ct_gtm.gtm.form", "GTM Form"),
    ("ct_gtm.gtm.click", "GTM Click"),
    ("ct_gtm.gtm.submit", "GTM Form Submit"),
    ("ct_gtm.gtm.history", "GTM History"),
    ("ct_gtm.gtm.jsError", "GTM JavaScript Error"),
    ("ct_gtm.gtm.scroll", "GTM Scroll"),
    ("ct_gtm.gtm.visible", "GTM Element Visibility"),
    ("ct_gtm.gtm.youtube", "GTM YouTube"),
    ("ct_gtm.gtm.vimeo", "GTM Vimeo"),
    ("ct_gtm.gtm.soundcloud", "GTM SoundCloud"),
    ("ct_gtm.gtm.video", "GTM Video"),
    ("ct_gtm.gtm.audio", "GTM Audio"),
    ("ct_gtm.gtm.linkClick", "GTM Link Click"),
    ("ct_gtm.gtm.formSubmit", "GTM Form Submit"),
    ("ct_gtm.gtm.historyChange", "GTM History Change"),
    ("ct_gtm.gtm.scrollDepth", "GTM Scroll Depth"),
    ("ct_gtm.gtm.visibility", "GTM Element Visibility"),
];

static MACRO_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    MACRO_TYPES.iter().copied().collect()
});

/// Looks up the friendly name for a macro (variable) function id.
pub fn macro_type_name(id: &str) -> Option<&'static str> {
    MACRO_INDEX.get(id).copied()
}

/// Known trigger listener types: bare function id to friendly name.
///
/// Trigger listener registrations appear in the container's `tags` array
/// alongside real tags; these ids are how the two are told apart.
pub static TRIGGER_TYPES: &[(&str, &str)] = &[
    ("evl", "Element Visibility"),
    ("cl", "Click Listener"),
    ("fsl", "Form Submit Listener"),
    ("hl", "History Listener"),
    ("jel", "JavaScript Error Listener"),
    ("lcl", "Link Click Listener"),
    ("sdl", "Scroll Depth Listener"),
    ("tl", "Timer Listener"),
    ("ytl", "YouTube Video Listener"),
];

static TRIGGER_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    TRIGGER_TYPES.iter().copied().collect()
});

/// Looks up the friendly name for a trigger listener id.
pub fn trigger_type_name(id: &str) -> Option<&'static str> {
    TRIGGER_INDEX.get(id).copied()
}

/// True when the bare id is one of the trigger listener registrations.
pub fn is_trigger_id(id: &str) -> bool {
    TRIGGER_INDEX.contains_key(id)
}

/// Internal plumbing ids that are neither user-facing tags nor trigger
/// listeners. Entries matching these (and not `cvt_`-prefixed) are counted
/// nowhere.
pub static NON_TAG_IDS: &[&str] = &["cl", "evl", "fsl", "lcl", "sdl", "dl", "ev", "f", "v"];

/// True when the bare id is internal plumbing rather than a user-facing tag.
pub fn is_non_tag_id(id: &str) -> bool {
    NON_TAG_IDS.contains(&id)
}
