pub const QUESTIONS_PER_PAGE: usize = 10;

/// Reads a `page` query value; absent or non-numeric means page 1.
pub fn parse_page(raw: Option<&str>) -> i64 {
    raw.and_then(|p| p.trim().parse().ok()).unwrap_or(1)
}

/// Returns the 1-indexed `page` of `items`, `page_size` items wide.
///
/// Pages below 1 are read as page 1. A page past the end is empty.
pub fn paginate<T>(page: i64, page_size: usize, items: &[T]) -> &[T] {
    let page = usize::try_from(page.max(1)).unwrap_or(usize::MAX);
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_holds_page_size_items() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(1, 10, &items), &items[0..10]);
        assert_eq!(paginate(3, 10, &items), &items[20..25]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(paginate(4, 10, &items).is_empty());
        assert!(paginate(i64::MAX, 10, &items).is_empty());
        assert!(paginate(1, 10, &Vec::<u32>::new()).is_empty());
    }

    #[test]
    fn pages_below_one_clamp_to_first_page() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(0, 10, &items), paginate(1, 10, &items));
        assert_eq!(paginate(-3, 10, &items), paginate(1, 10, &items));
    }

    #[test]
    fn zero_page_size_yields_nothing() {
        let items = [1, 2, 3];
        assert!(paginate(1, 0, &items).is_empty());
    }

    #[test]
    fn pages_reassemble_original_list() {
        for len in 0..40usize {
            let items: Vec<usize> = (0..len).collect();
            for page_size in 1..12usize {
                let mut rebuilt = Vec::new();
                let mut page = 1;
                loop {
                    let slice = paginate(page, page_size, &items);
                    assert!(slice.len() <= page_size);
                    if slice.is_empty() {
                        break;
                    }
                    rebuilt.extend_from_slice(slice);
                    page += 1;
                }
                assert_eq!(rebuilt, items, "len {} page size {}", len, page_size);
            }
        }
    }

    #[test]
    fn parse_page_falls_back_to_one() {
        assert_eq!(parse_page(None), 1);
        assert_eq!(parse_page(Some("")), 1);
        assert_eq!(parse_page(Some("two")), 1);
        assert_eq!(parse_page(Some("2")), 2);
        assert_eq!(parse_page(Some("-1")), -1);
    }
}
