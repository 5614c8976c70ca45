//! Static page templates.
//!
//! Each page's static document contains a fixed set of section regions,
//! and list-shaped regions contain a fixed number of template elements
//! (cards, stat items, paragraphs). Content arrays pair with template
//! slots positionally: shorter arrays leave trailing slots at their
//! static fallback content, longer arrays truncate. The DOM is never
//! cloned or grown.

use crate::locale::PageSlug;
use crate::section::SectionType;

/// One patchable region of a static page.
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub section_type: SectionType,
    /// Root CSS selector of the region.
    pub root: &'static str,
    /// Template slot counts per list-shaped content field.
    pub slots: &'static [(&'static str, usize)],
}

impl Region {
    /// Number of template elements for a list field; zero when the
    /// region declares no such list.
    pub fn slot_count(&self, field: &str) -> usize {
        self.slots
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// The set of regions a page's static document actually contains.
#[derive(Debug, Clone, Copy)]
pub struct PageTemplate {
    regions: &'static [Region],
}

impl PageTemplate {
    /// Look up the region for a section type; `None` means the page
    /// simply does not contain that section and it must be skipped.
    pub fn region(&self, ty: SectionType) -> Option<&Region> {
        self.regions.iter().find(|r| r.section_type == ty)
    }
}

const HERO: Region = Region {
    section_type: SectionType::Hero,
    root: ".hero",
    slots: &[],
};

const ABOUT: Region = Region {
    section_type: SectionType::About,
    root: ".about",
    slots: &[("description", 2), ("points", 3)],
};

const TREATMENTS: Region = Region {
    section_type: SectionType::Treatments,
    root: ".treatments",
    slots: &[("items", 4)],
};

const TRUST: Region = Region {
    section_type: SectionType::Trust,
    root: ".trust",
    slots: &[("items", 4)],
};

const RESULTS: Region = Region {
    section_type: SectionType::Results,
    root: ".results",
    slots: &[],
};

const COLUMN: Region = Region {
    section_type: SectionType::Column,
    root: ".column",
    slots: &[],
};

const PROMO: Region = Region {
    section_type: SectionType::Promo,
    root: ".promo",
    slots: &[("items", 3)],
};

const LOCATION: Region = Region {
    section_type: SectionType::Location,
    root: ".location",
    slots: &[("info", 3)],
};

const CTA: Region = Region {
    section_type: SectionType::Cta,
    root: ".cta",
    slots: &[],
};

/// The reservation page has no full-width CTA block, only the floating one.
const FLOATING_CTA: Region = Region {
    section_type: SectionType::Cta,
    root: ".floating-cta",
    slots: &[],
};

/// The static template for a page.
pub fn template_for(page: PageSlug) -> PageTemplate {
    match page {
        PageSlug::Home => PageTemplate {
            regions: &[
                HERO, ABOUT, TREATMENTS, TRUST, RESULTS, COLUMN, PROMO, LOCATION, CTA,
            ],
        },
        PageSlug::About => PageTemplate {
            regions: &[HERO, ABOUT, TRUST, CTA],
        },
        PageSlug::Results => PageTemplate {
            regions: &[RESULTS, CTA],
        },
        PageSlug::Location => PageTemplate {
            regions: &[LOCATION, CTA],
        },
        PageSlug::Reservation => PageTemplate {
            regions: &[FLOATING_CTA],
        },
    }
}
