//! PickItem trait for items managed by a dual list.

use std::cmp::Ordering;

/// Trait for items that can be assigned through a dual list.
///
/// Implement this trait to expose the identity and display label the
/// container works with. Ids must be unique across one container and
/// stable for the lifetime of the items; everything else about the item
/// is opaque to the container.
///
/// # Example
///
/// ```ignore
/// #[derive(Clone)]
/// struct Location {
///     code: String,
///     name: String,
/// }
///
/// impl PickItem for Location {
///     fn id(&self) -> &str {
///         &self.code
///     }
///
///     fn label(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait PickItem: Clone + Send + Sync + 'static {
    /// Unique, stable identity of this item.
    fn id(&self) -> &str;

    /// Human-readable label shown in the list and matched by filters.
    fn label(&self) -> &str;

    /// Display rank used when preparing candidates. Lower sorts first.
    fn sort_order(&self) -> i64 {
        0
    }
}

/// Sort candidates into display order: `sort_order`, then label, then id.
///
/// The container itself never reorders partitions, so callers sort the
/// candidate set once before handing it over.
pub fn sort_candidates<T: PickItem>(items: &mut [T]) {
    items.sort_by(compare);
}

fn compare<T: PickItem>(a: &T, b: &T) -> Ordering {
    a.sort_order()
        .cmp(&b.sort_order())
        .then_with(|| a.label().cmp(b.label()))
        .then_with(|| a.id().cmp(b.id()))
}
