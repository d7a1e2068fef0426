// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

/// Ordered, non-empty list of color tokens handed out to new lineages.
///
/// Tokens are opaque to the layout; renderers decide what `"#5aa1be"` or
/// `"blue"` mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<SmolStr>,
}

impl Palette {
    /// Returns `None` when `colors` is empty.
    pub fn new<I, S>(colors: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let colors = colors.into_iter().map(|c| SmolStr::new(c.as_ref())).collect::<Vec<_>>();
        (!colors.is_empty()).then_some(Self { colors })
    }

    pub fn colors(&self) -> &[SmolStr] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub(crate) fn cursor(&self) -> ColorCursor<'_> {
        ColorCursor { palette: self, drawn: 0 }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self { colors: DEFAULT_COLORS.iter().copied().map(SmolStr::new_static).collect() }
    }
}

pub const DEFAULT_COLORS: [&str; 8] =
    ["#5aa1be", "#c065b8", "#c0ab5f", "#59bb7d", "#c0615d", "#6b71c1", "#95a83f", "#3aa39c"];

/// Monotonic cyclic counter over a [`Palette`].
///
/// Only fresh lineages draw from it; continuations and joins reuse the color
/// of the lane they travel in.
#[derive(Debug, Clone)]
pub(crate) struct ColorCursor<'a> {
    palette: &'a Palette,
    drawn: usize,
}

impl ColorCursor<'_> {
    pub(crate) fn next_color(&mut self) -> SmolStr {
        let color = self.palette.colors[self.drawn % self.palette.colors.len()].clone();
        self.drawn += 1;
        color
    }

    pub(crate) fn drawn(&self) -> usize {
        self.drawn
    }
}
