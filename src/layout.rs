//! Section grouping and row layout.
//!
//! Turns one segment index slice (tag → members or series → members) plus
//! the static grouping configuration into a renderable structure: sections
//! ranked by size, bucketed into named groups, and laid out into fixed-width
//! rows, with per-group aggregate stats for the group headers.
//!
//! Configured groups display first in declaration order; the implicit
//! "Other" group always comes last. With no configured groups the whole view
//! collapses to a single header-less bucket.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::config::GroupingConfig;
use crate::index::IndexBundle;

/// Name of the implicit group collecting unassigned sections.
pub const OTHER_GROUP: &str = "Other";

/// One member document inside a rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    /// 1-based position within the section, in bucket order. For a series
    /// section this is the "Part N" number.
    pub position: usize,
    pub file_name: String,
    pub title: String,
}

/// One rendered tag or series section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub summary: Option<String>,
    /// Common synonyms, shown as an annotation next to the title.
    pub common: Vec<String>,
    pub entries: Vec<SectionEntry>,
}

/// A display group: its rows of sections plus header stats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupLayout {
    pub name: String,
    /// Sections assigned to this group.
    pub section_count: usize,
    /// Distinct documents spanned by those sections.
    pub unique_posts: usize,
    pub rows: Vec<Vec<Section>>,
}

/// The full layout for one segment view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentLayout {
    pub groups: Vec<GroupLayout>,
    /// False when no groups are configured: the single "Other" bucket
    /// renders without a group header.
    pub show_headers: bool,
}

/// Transient per-group state while the layout is being computed.
#[derive(Default)]
struct GroupAccumulator {
    current_row: Vec<Section>,
    rows: Vec<Vec<Section>>,
    unique_posts: HashSet<String>,
    section_count: usize,
}

impl GroupAccumulator {
    fn push_section(&mut self, section: Section, columns: usize) {
        self.current_row.push(section);
        if self.current_row.len() == columns {
            self.rows.push(std::mem::take(&mut self.current_row));
        }
    }

    fn finish(mut self, name: String) -> GroupLayout {
        if !self.current_row.is_empty() {
            self.rows.push(std::mem::take(&mut self.current_row));
        }
        GroupLayout {
            name,
            section_count: self.section_count,
            unique_posts: self.unique_posts.len(),
            rows: self.rows,
        }
    }
}

/// Compute the layout for one segment view.
///
/// `segment` is a slice of the bundle (`bundle.tags` or `bundle.series`);
/// the bundle itself supplies member titles. `columns` is the row width.
pub fn build_layout(
    segment: &BTreeMap<String, Vec<String>>,
    grouping: &GroupingConfig,
    bundle: &IndexBundle,
    columns: usize,
) -> SegmentLayout {
    // Reverse lookup: section name → declared group. Later declarations win.
    let mut group_of: HashMap<&str, &str> = HashMap::new();
    for group in &grouping.groups {
        for tag in &group.tags {
            group_of.insert(tag.as_str(), group.name.as_str());
        }
    }

    // Display order: configured groups first, implicit "Other" last.
    let mut order: Vec<&str> = grouping.groups.iter().map(|g| g.name.as_str()).collect();
    order.push(OTHER_GROUP);
    let mut accumulators: HashMap<&str, GroupAccumulator> = order
        .iter()
        .map(|name| (*name, GroupAccumulator::default()))
        .collect();

    // Rank sections: member count descending, name ascending on ties.
    let mut ranked: Vec<(&String, &Vec<String>)> = segment.iter().collect();
    ranked.sort_by(|(a_name, a_members), (b_name, b_members)| {
        b_members
            .len()
            .cmp(&a_members.len())
            .then_with(|| a_name.cmp(b_name))
    });

    for (name, members) in ranked {
        let group_name = group_of.get(name.as_str()).copied().unwrap_or(OTHER_GROUP);
        let acc = accumulators.entry(group_name).or_default();
        acc.section_count += 1;

        let entries: Vec<SectionEntry> = members
            .iter()
            .enumerate()
            .map(|(i, file_name)| {
                acc.unique_posts.insert(file_name.clone());
                let title = bundle
                    .posts
                    .get(file_name)
                    .and_then(|p| p.title.clone())
                    .unwrap_or_else(|| file_name.clone());
                SectionEntry {
                    position: i + 1,
                    file_name: file_name.clone(),
                    title,
                }
            })
            .collect();

        let info = grouping.titles.get(name);
        acc.push_section(
            Section {
                name: name.clone(),
                summary: info.and_then(|i| i.summary.clone()),
                common: info.map(|i| i.common.clone()).unwrap_or_default(),
                entries,
            },
            columns,
        );
    }

    let groups = order
        .into_iter()
        .map(|name| {
            accumulators
                .remove(name)
                .unwrap_or_default()
                .finish(name.to_string())
        })
        .collect();

    SegmentLayout {
        groups,
        show_headers: !grouping.groups.is_empty(),
    }
}
