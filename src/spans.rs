//! Protected spans.
//!
//! Before the pipeline runs, regions the caller wants left alone are cut out
//! of the buffer and replaced by an ASCII placeholder, one per kind. The cut
//! text goes into a per-kind FIFO queue. After the pipeline, every placeholder
//! is swapped back for the front of its queue.
//!
//! Kinds are extracted in [`SpanKind::EXTRACTION_ORDER`] and restored in the
//! exact reverse, so a span that was cut out of an enclosing span comes back
//! only after the enclosing span has been put back.
//!
//! Placeholders look like Latin identifiers (`__VIRGOOL_HTML__`), which every
//! stage leaves alone.

use crate::options::Options;
use memchr::memmem;
use regex::Regex;
use std::{borrow::Cow, collections::VecDeque, sync::LazyLock};

static CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<\s*code[^>]*>.*?<\s*/code\s*>|```[a-z]*\s*.*?\s*```")
        .expect("valid code span regex")
});
static PRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<\s*pre[^>]*>.*?<\s*/pre\s*>").expect("valid pre span regex")
});
static HTML: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<>]+>").expect("valid html span regex"));
static URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://[^,\s()<>]+(?:\([\w\d]+\)|[^,[:punct:]\s]|/)")
        .expect("valid uri span regex")
});
static BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[.*?\]").expect("valid bracket span regex"));
static BRACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{.*?\}").expect("valid brace span regex"));

/// Category of a protected region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// `<code>…</code>` and fenced ```` ``` ```` blocks.
    Code,
    /// `<pre>…</pre>`.
    Pre,
    /// Any single HTML tag.
    Html,
    /// `http://` and `https://` URIs.
    Uri,
    /// `[…]`, non-nested.
    Brackets,
    /// `{…}`, non-nested.
    Braces,
}

impl SpanKind {
    pub const EXTRACTION_ORDER: [SpanKind; 6] = [
        SpanKind::Code,
        SpanKind::Pre,
        SpanKind::Html,
        SpanKind::Uri,
        SpanKind::Brackets,
        SpanKind::Braces,
    ];

    #[inline(always)]
    pub const fn placeholder(self) -> &'static str {
        match self {
            SpanKind::Code => "__VIRGOOL_CODE__",
            SpanKind::Pre => "__VIRGOOL_PRE__",
            SpanKind::Html => "__VIRGOOL_HTML__",
            SpanKind::Uri => "__VIRGOOL_URI__",
            SpanKind::Brackets => "__VIRGOOL_BRACKETS__",
            SpanKind::Braces => "__VIRGOOL_BRACES__",
        }
    }

    /// The `preserve_*` flag that turns protection of this kind on.
    #[inline(always)]
    pub const fn is_enabled(self, options: &Options) -> bool {
        match self {
            SpanKind::Code => options.preserve_code,
            SpanKind::Pre => options.preserve_pre,
            SpanKind::Html => options.preserve_html,
            SpanKind::Uri => options.preserve_uris,
            SpanKind::Brackets => options.preserve_brackets,
            SpanKind::Braces => options.preserve_braces,
        }
    }

    #[inline(always)]
    const fn index(self) -> usize {
        self as usize
    }

    fn matcher(self) -> &'static Regex {
        match self {
            SpanKind::Code => &CODE,
            SpanKind::Pre => &PRE,
            SpanKind::Html => &HTML,
            SpanKind::Uri => &URI,
            SpanKind::Brackets => &BRACKETS,
            SpanKind::Braces => &BRACES,
        }
    }

    /// Context check the matcher cannot express: a URI must not be glued to
    /// a preceding ASCII word character (`xhttp://…`).
    fn accepts(self, text: &str, start: usize) -> bool {
        match self {
            SpanKind::Uri => !text[..start]
                .bytes()
                .next_back()
                .is_some_and(|b| b.is_ascii_alphanumeric() || b == b'_'),
            _ => true,
        }
    }
}

/// Replace every match of `kind`, left to right, with its placeholder.
///
/// Returns the rewritten buffer and the cut text in match order.
pub fn extract(text: Cow<'_, str>, kind: SpanKind) -> (Cow<'_, str>, VecDeque<String>) {
    let re = kind.matcher();
    let placeholder = kind.placeholder();
    let mut queue = VecDeque::new();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while let Some(m) = re.find_at(&text, pos) {
        if !kind.accepts(&text, m.start()) {
            pos = m.start() + text[m.start()..].chars().next().map_or(1, char::len_utf8);
            continue;
        }
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
        buf.push_str(&text[copied..m.start()]);
        buf.push_str(placeholder);
        queue.push_back(m.as_str().to_owned());
        copied = m.end();
        pos = m.end();
    }

    let text = match out {
        None => text,
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    };
    (text, queue)
}

/// Swap each placeholder of `kind`, left to right, for the front of `queue`.
///
/// Placeholders left over once the queue is empty (ones that were in the
/// input to begin with) stay as they are.
pub fn restore<'a>(text: Cow<'a, str>, kind: SpanKind, queue: &mut VecDeque<String>) -> Cow<'a, str> {
    if queue.is_empty() {
        return text;
    }
    let placeholder = kind.placeholder();
    let mut out: Option<String> = None;
    let mut copied = 0;

    for start in memmem::find_iter(text.as_bytes(), placeholder.as_bytes()) {
        let Some(original) = queue.pop_front() else {
            break;
        };
        let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + original.len()));
        buf.push_str(&text[copied..start]);
        buf.push_str(&original);
        copied = start + placeholder.len();
    }

    match out {
        None => text,
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    }
}

/// Cut text of every protected kind, for one normalization run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpanRegistry {
    queues: [VecDeque<String>; 6],
}

impl SpanRegistry {
    /// Entries still waiting to be restored for `kind`.
    pub fn get(&self, kind: SpanKind) -> &VecDeque<String> {
        &self.queues[kind.index()]
    }

    pub fn len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(VecDeque::is_empty)
    }

    /// Put every recorded span back, braces first and code last.
    pub fn restore<'a>(&mut self, text: Cow<'a, str>) -> Cow<'a, str> {
        SpanKind::EXTRACTION_ORDER
            .iter()
            .rev()
            .fold(text, |text, &kind| restore(text, kind, &mut self.queues[kind.index()]))
    }
}

/// Extract every kind enabled in `options`, in extraction order.
pub fn protect<'a>(text: Cow<'a, str>, options: &Options) -> (Cow<'a, str>, SpanRegistry) {
    let mut registry = SpanRegistry::default();
    let mut text = text;
    for kind in SpanKind::EXTRACTION_ORDER {
        if !kind.is_enabled(options) {
            continue;
        }
        let (rest, queue) = extract(text, kind);
        if !queue.is_empty() {
            log_debug!("protected {} {:?} span(s)", queue.len(), kind);
        }
        text = rest;
        registry.queues[kind.index()] = queue;
    }
    (text, registry)
}
