//! Post-processing pass that turns raw list indentation widths into
//! zero-based nesting levels.
//!
//! Within each list scope the distinct widths of its items are sorted and
//! every item's level becomes the rank of its width. Nested lists are their
//! own scopes; a list still open at the end of the stream is remapped as if
//! it closed there.

use crate::element::{Element, Tag};

struct Scope {
    /// Indices of the `ListItem` opens owned by this list
    items: Vec<usize>,
}

pub fn normalize_list_levels(elements: &mut [Element]) {
    let mut scopes: Vec<Scope> = Vec::new();

    for i in 0..elements.len() {
        let element = &elements[i];
        if element.tag.is_list() {
            if element.closing {
                if let Some(scope) = scopes.pop() {
                    remap(elements, &scope.items);
                }
            } else {
                scopes.push(Scope { items: Vec::new() });
            }
        } else if element.is_open(Tag::ListItem)
            && let Some(scope) = scopes.last_mut()
        {
            scope.items.push(i);
        }
    }

    while let Some(scope) = scopes.pop() {
        log::trace!("Remapping unclosed list with {} items", scope.items.len());
        remap(elements, &scope.items);
    }
}

fn remap(elements: &mut [Element], items: &[usize]) {
    let mut widths: Vec<usize> = items.iter().map(|&i| elements[i].level).collect();
    widths.sort_unstable();
    widths.dedup();

    for &i in items {
        let rank = widths.binary_search(&elements[i].level).unwrap_or(0);
        elements[i].level = rank;
    }
    log::debug!("Normalized {} list items to {} levels", items.len(), widths.len());
}
