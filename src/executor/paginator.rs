//! Offset/limit windowing
//!
//! Never fails: an offset past the end yields an empty page, an overshooting
//! window is clamped, and a negative offset counts from zero.

/// Applies an offset/limit window to an ordered sequence
pub struct Paginator;

impl Paginator {
    /// Returns the window `[offset, offset + limit)` of `items`.
    ///
    /// `limit <= 0` means no limit and returns `items` unchanged, whatever the offset.
    pub fn paginate<T>(items: &[T], limit: i64, offset: i64) -> &[T] {
        if limit <= 0 {
            return items;
        }
        Self::window(items, Some(usize::try_from(limit).unwrap_or(usize::MAX)), offset)
    }

    /// Same as `paginate` with an explicit optional limit
    pub fn window<T>(items: &[T], limit: Option<usize>, offset: i64) -> &[T] {
        let limit = match limit {
            Some(limit) if limit > 0 => limit,
            _ => return items,
        };

        let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(limit).min(items.len());

        &items[start..end]
    }
}
