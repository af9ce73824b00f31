//! Words that are usually left untranslated.
//!
//! Technical terms, product names and month names often read the same in the
//! target language, so an identical translation is not suspicious.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase terms expected to be identical across languages.
pub const SAME_BLACKLIST: &[&str] = &[
    "accelerator",
    "action",
    "actions",
    "active",
    "alarm",
    "amazon",
    "atom",
    "audio",
    "auto",
    "avatar",
    "bitcoin",
    "blog",
    "bluetooth",
    "bzip2",
    "chat",
    "cm",
    "copyright",
    "csv",
    "cvs",
    "data",
    "dbm",
    "description",
    "dm",
    "download",
    "dpi",
    "dummy",
    "e-mail",
    "eib",
    "email",
    "esperanto",
    "expert",
    "export",
    "fax",
    "feeds",
    "filter",
    "firmware",
    "flash",
    "flattr",
    "fulltext",
    "gammu",
    "general",
    "gettext",
    "google",
    "gib",
    "git",
    "gtk",
    "gzip",
    "headset",
    "hardware",
    "help",
    "horizontal",
    "id",
    "in",
    "irc",
    "irda",
    "imei",
    "import",
    "info",
    "information",
    "isbn",
    "jabber",
    "kib",
    "km",
    "latex",
    "layout",
    "linux",
    "lithium ion",
    "lithium polymer",
    "ltr",
    "ma",
    "mah",
    "mailbox",
    "maildir",
    "media",
    "model",
    "monitor",
    "motif",
    "mib",
    "mm",
    "mv",
    "n/a",
    "name",
    "nimh",
    "normal",
    "null",
    "ok",
    "online",
    "open document",
    "operator",
    "orientation",
    "pager",
    "paypal",
    "pdf",
    "personal",
    "pib",
    "port",
    "position",
    "python-gammu",
    "program",
    "proxy",
    "pt",
    "px",
    "rebase",
    "reset",
    "roadmap",
    "rss",
    "rtl",
    "script",
    "server",
    "sim",
    "smsc",
    "software",
    "sql",
    "standard",
    "start",
    "status",
    "stop",
    "style",
    "syndication",
    "system",
    "text",
    "tib",
    "ukolovnik",
    "unicode",
    "vcalendar",
    "vcard",
    "version",
    "vertical",
    "video",
    "wammu",
    "web",
    "weblate",
    "wiki",
    "windows",
    "www",
    "xml",
    "zip",

    // Months are the same in some languages
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",

    "jan",
    "feb",
    "mar",
    "apr",
    "jun",
    "jul",
    "aug",
    "sep",
    "oct",
    "nov",
    "dec",
];

static BLACKLIST_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SAME_BLACKLIST.iter().copied().collect());

/// Whether `word` (already lowercased) is on the list.
pub fn is_blacklisted(word: &str) -> bool {
    BLACKLIST_SET.contains(word)
}
