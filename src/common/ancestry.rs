//! Ancestry checks and minimal relative-path computation between absolute paths.

use crate::{
    constants::{PARENT_ATOM, SELF_ATOM},
    AbsolutePath, Dialect, Drive, Normalizer, PathError, RelativePath, Result,
};
use std::iter;

/// Computes the shortest relative path `R` such that resolving `R` against `parent` and
/// normalizing yields `child`.
///
/// Both inputs are normalized first. The common prefix is positional: atoms are compared index by
/// index and the first difference ends it, so repeated atom values elsewhere in either path never
/// count as shared structure.
pub(crate) fn relative_to<D: Dialect>(
    child: &AbsolutePath<D>,
    parent: &AbsolutePath<D>,
) -> Result<RelativePath<D>> {
    if !Drive::matches_option(child.drive(), parent.drive()) {
        log::debug!("cannot compute {child} relative to {parent} across drives");
        return Err(PathError::DriveMismatch {
            left: child.drive(),
            right: parent.drive(),
        });
    }

    let child = Normalizer.normalize_absolute(child);
    let parent = Normalizer.normalize_absolute(parent);
    let shared = common_prefix_len(child.atoms(), parent.atoms());

    let parent_tail = &parent.atoms()[shared..];
    let child_tail = &child.atoms()[shared..];

    let atoms: Vec<String> = if parent_tail.is_empty() && child_tail.is_empty() {
        vec![SELF_ATOM.to_string()]
    } else {
        iter::repeat(PARENT_ATOM)
            .take(parent_tail.len())
            .map(String::from)
            .chain(child_tail.iter().cloned())
            .collect()
    };

    log::trace!("{child} relative to {parent} is {atoms:?}");
    Ok(RelativePath::new_unchecked(None, false, atoms, false))
}

pub(crate) fn is_parent_of<D: Dialect>(parent: &AbsolutePath<D>, child: &AbsolutePath<D>) -> bool {
    descends_by(parent, child, |parent_len, child_len| child_len == parent_len + 1)
}

pub(crate) fn is_ancestor_of<D: Dialect>(
    ancestor: &AbsolutePath<D>,
    descendant: &AbsolutePath<D>,
) -> bool {
    descends_by(ancestor, descendant, |ancestor_len, descendant_len| {
        descendant_len > ancestor_len
    })
}

/// Returns true if the drives match, `upper`'s normalized atoms prefix `lower`'s, and `depth`
/// accepts the two atom counts
fn descends_by<D: Dialect>(
    upper: &AbsolutePath<D>,
    lower: &AbsolutePath<D>,
    depth: impl Fn(usize, usize) -> bool,
) -> bool {
    if !Drive::matches_option(upper.drive(), lower.drive()) {
        return false;
    }

    let upper = Normalizer.normalize_absolute(upper);
    let lower = Normalizer.normalize_absolute(lower);
    let (upper, lower) = (upper.atoms(), lower.atoms());

    depth(upper.len(), lower.len()) && common_prefix_len(upper, lower) == upper.len()
}

fn common_prefix_len(left: &[String], right: &[String]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(left, right)| left == right)
        .count()
}
