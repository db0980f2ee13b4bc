//! Structure-preserving sidebar transformation.

use crate::item::{CategoryItem, SidebarItem};

/// Apply `update` to every item of a sidebar, returning a new tree.
///
/// Category children are rebuilt before `update` sees the category itself,
/// so the callback always observes already-transformed descendants. Nesting,
/// ordering, and variant placement are preserved exactly, except for fields
/// `update` chooses to change. The input is left untouched.
#[must_use]
pub fn transform_items<F>(items: &[SidebarItem], update: &F) -> Vec<SidebarItem>
where
    F: Fn(SidebarItem) -> SidebarItem,
{
    items
        .iter()
        .map(|item| transform_item(item, update))
        .collect()
}

fn transform_item<F>(item: &SidebarItem, update: &F) -> SidebarItem
where
    F: Fn(SidebarItem) -> SidebarItem,
{
    match item {
        SidebarItem::Category(category) => update(SidebarItem::Category(CategoryItem {
            label: category.label.clone(),
            items: transform_items(&category.items, update),
            link: category.link.clone(),
        })),
        SidebarItem::Doc(_) | SidebarItem::Ref(_) | SidebarItem::Link(_) => update(item.clone()),
    }
}
