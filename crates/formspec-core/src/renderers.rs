//! Custom renderer lookup
//!
//! The rendering layer owns the renderers; validation only needs to know whether a
//! name a View refers to is one the caller can render.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Renderers every rendering layer provides
pub const BUILTIN_RENDERERS: [&str; 1] = ["PropertyChooser"];

/// Membership check for renderer names
pub trait RendererLookup {
    /// True when `name` refers to a renderer the caller can provide
    fn contains_renderer(&self, name: &str) -> bool;
}

impl<S: AsRef<str>> RendererLookup for [S] {
    fn contains_renderer(&self, name: &str) -> bool {
        self.iter().any(|candidate| candidate.as_ref() == name)
    }
}

impl<S: AsRef<str>, const N: usize> RendererLookup for [S; N] {
    fn contains_renderer(&self, name: &str) -> bool {
        self.as_slice().contains_renderer(name)
    }
}

impl<S: AsRef<str>> RendererLookup for Vec<S> {
    fn contains_renderer(&self, name: &str) -> bool {
        self.as_slice().contains_renderer(name)
    }
}

impl<St: BuildHasher> RendererLookup for HashSet<String, St> {
    fn contains_renderer(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl RendererLookup for BTreeSet<String> {
    fn contains_renderer(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<H, St: BuildHasher> RendererLookup for HashMap<String, H, St> {
    fn contains_renderer(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}

impl<H> RendererLookup for BTreeMap<String, H> {
    fn contains_renderer(&self, name: &str) -> bool {
        self.contains_key(name)
    }
}
