// used to print out readable forms of a quote
use std::fmt;

// ------------- Quote -------------
/// One normalized quote record.
///
/// Text fields are `None` when the backing store held no value (an empty
/// string in the store collapses to `None` as well). Numeric date parts use
/// 0 for "unknown", and out-of-range raw values are clamped on extraction,
/// never wrapped. `common_era` is true for AD/CE and false for BC/BCE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub(crate) author: Option<String>,
    pub(crate) text: Option<String>,
    pub(crate) comment: Option<String>,
    pub(crate) day: u8,
    pub(crate) month: u8,
    pub(crate) year: u16,
    pub(crate) common_era: bool,
}

impl Quote {
    /// An empty quote: no text fields, all date parts 0, era CE.
    ///
    /// Both backends start from this value when populating a record, so the
    /// era default is the same no matter where a quote came from.
    pub fn new() -> Self {
        Self {
            author: None,
            text: None,
            comment: None,
            day: 0,
            month: 0,
            year: 0,
            common_era: true,
        }
    }
    // It's intentional to encapsulate the fields in the struct
    // and only expose them using "getters", because this yields
    // true immutability for records after population.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
    pub fn day(&self) -> u8 {
        self.day
    }
    pub fn month(&self) -> u8 {
        self.month
    }
    pub fn year(&self) -> u16 {
        self.year
    }
    pub fn common_era(&self) -> bool {
        self.common_era
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = self.text.as_deref().unwrap_or("");
        let author = self.author.as_deref().unwrap_or("unknown");
        let era = if self.common_era { "CE" } else { "BCE" };
        write!(f, "\"{}\" ({}, {} {})", text, author, self.year, era)
    }
}

// ------------- QuoteChain -------------
/// Stable index of a quote within its owning [`QuoteChain`].
pub type QuoteId = usize;

#[derive(Debug)]
struct Node {
    quote: Quote,
    next: Option<QuoteId>,
    prev: Option<QuoteId>,
}

/// An ordered chain of quotes, owned exclusively by the caller that
/// received it from a retrieval call.
///
/// Nodes live in an arena and link to their neighbours through stable
/// indices, so releasing part of a chain leaves vacant slots behind rather
/// than dangling references. A released id simply reads back as absent.
#[derive(Debug)]
pub struct QuoteChain {
    slots: Vec<Option<Node>>,
    head: QuoteId,
}

impl QuoteChain {
    /// Chain the given quotes in iteration order.
    ///
    /// Returns `None` when the iterator yields nothing. Backends express
    /// their partial-failure rules by shaping the iterator they pass in: a
    /// source that must truncate on a failed record construction simply
    /// stops yielding at that point.
    pub fn assemble<I>(quotes: I) -> Option<QuoteChain>
    where
        I: IntoIterator<Item = Quote>,
    {
        let mut slots: Vec<Option<Node>> = Vec::new();
        let mut tail: Option<QuoteId> = None;
        for quote in quotes {
            let id = slots.len();
            slots.push(Some(Node {
                quote,
                next: None,
                prev: tail,
            }));
            if let Some(t) = tail {
                if let Some(node) = slots[t].as_mut() {
                    node.next = Some(id);
                }
            }
            tail = Some(id);
        }
        if slots.is_empty() {
            None
        } else {
            Some(QuoteChain { slots, head: 0 })
        }
    }

    /// The id of the first quote in source order.
    pub fn head(&self) -> QuoteId {
        self.head
    }

    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.node(id).map(|n| &n.quote)
    }
    pub fn next(&self, id: QuoteId) -> Option<QuoteId> {
        self.node(id)?.next
    }
    pub fn prev(&self, id: QuoteId) -> Option<QuoteId> {
        self.node(id)?.prev
    }

    /// Number of quotes still held by the chain, regardless of linkage.
    ///
    /// Retrieval can truncate a chain without signalling it in the return
    /// value, so this is the out-of-band completeness check: compare it
    /// against the source's `count`.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Total quotes reachable from `id` by walking both link directions,
    /// including `id` itself. 0 when `id` has been released.
    pub fn len_from(&self, id: QuoteId) -> usize {
        if self.node(id).is_none() {
            return 0;
        }
        let mut total = 1;
        let mut cur = id;
        while let Some(p) = self.prev(cur) {
            if self.node(p).is_none() {
                break;
            }
            total += 1;
            cur = p;
        }
        cur = id;
        while let Some(n) = self.next(cur) {
            if self.node(n).is_none() {
                break;
            }
            total += 1;
            cur = n;
        }
        total
    }

    /// Release `id` and everything reachable from it through both links.
    pub fn release(&mut self, id: QuoteId) {
        if let Some(p) = self.prev(id) {
            self.release_backward(p);
        }
        self.release_forward(id);
    }

    /// Release `id` and everything after it, leaving earlier quotes intact.
    /// The quote before `id` (if any) becomes the new chain end.
    pub fn release_forward(&mut self, id: QuoteId) {
        let mut boundary: Option<QuoteId> = None;
        let mut first = true;
        let mut cur = Some(id);
        while let Some(i) = cur {
            let Some(node) = self.slots.get_mut(i).and_then(Option::take) else {
                break;
            };
            if first {
                boundary = node.prev;
                first = false;
            }
            cur = node.next;
        }
        if let Some(b) = boundary {
            if let Some(node) = self.slots.get_mut(b).and_then(Option::as_mut) {
                node.next = None;
            }
        }
    }

    /// Release `id` and everything before it, leaving later quotes intact.
    /// The quote after `id` (if any) becomes the new chain start.
    pub fn release_backward(&mut self, id: QuoteId) {
        let mut boundary: Option<QuoteId> = None;
        let mut first = true;
        let mut cur = Some(id);
        while let Some(i) = cur {
            let Some(node) = self.slots.get_mut(i).and_then(Option::take) else {
                break;
            };
            if first {
                boundary = node.next;
                first = false;
            }
            cur = node.prev;
        }
        if let Some(b) = boundary {
            if let Some(node) = self.slots.get_mut(b).and_then(Option::as_mut) {
                node.prev = None;
            }
        }
    }

    /// Iterate forward from the head in source order.
    pub fn iter(&self) -> Quotes<'_> {
        self.iter_from(self.head)
    }

    /// Iterate forward from the given id.
    pub fn iter_from(&self, id: QuoteId) -> Quotes<'_> {
        Quotes {
            chain: self,
            cursor: Some(id),
        }
    }

    fn node(&self, id: QuoteId) -> Option<&Node> {
        self.slots.get(id)?.as_ref()
    }
}

pub struct Quotes<'a> {
    chain: &'a QuoteChain,
    cursor: Option<QuoteId>,
}

impl<'a> Iterator for Quotes<'a> {
    type Item = &'a Quote;
    fn next(&mut self) -> Option<&'a Quote> {
        let id = self.cursor?;
        let node = self.chain.node(id)?;
        self.cursor = node.next;
        Some(&node.quote)
    }
}
