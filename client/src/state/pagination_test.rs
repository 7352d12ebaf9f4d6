use super::*;

// =============================================================
// total_pages / page_slice
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 0);
    assert_eq!(total_pages(1), 1);
    assert_eq!(total_pages(4), 1);
    assert_eq!(total_pages(5), 2);
    assert_eq!(total_pages(21), 6);
}

#[test]
fn page_slice_returns_fixed_windows() {
    let items: Vec<u32> = (1..=10).collect();
    assert_eq!(page_slice(&items, 1), &[1, 2, 3, 4]);
    assert_eq!(page_slice(&items, 2), &[5, 6, 7, 8]);
    assert_eq!(page_slice(&items, 3), &[9, 10]);
}

#[test]
fn page_slice_out_of_range_is_empty() {
    let items: Vec<u32> = (1..=3).collect();
    assert!(page_slice(&items, 2).is_empty());
    assert!(page_slice::<u32>(&[], 1).is_empty());
}

#[test]
fn pages_partition_the_list_for_every_length() {
    for len in 0..=17_u32 {
        let items: Vec<u32> = (0..len).collect();
        let rebuilt: Vec<u32> = (1..=total_pages(items.len()))
            .flat_map(|page| page_slice(&items, page).iter().copied())
            .collect();
        assert_eq!(rebuilt, items, "partition broken for len {len}");
    }
}

#[test]
fn clamp_page_stays_within_bounds() {
    assert_eq!(clamp_page(0, 10), 1);
    assert_eq!(clamp_page(9, 10), 3);
    assert_eq!(clamp_page(2, 10), 2);
    assert_eq!(clamp_page(4, 0), 1);
}

// =============================================================
// controls
// =============================================================

#[test]
fn controls_hidden_when_one_page_suffices() {
    let bar = controls(4, 1);
    assert!(!bar.visible);
}

#[test]
fn controls_first_page_hides_previous() {
    let bar = controls(10, 1);
    assert!(bar.visible);
    assert!(!bar.show_previous);
    assert!(bar.show_next);
    assert_eq!(
        bar.links,
        vec![
            PageLink { number: 1, active: true },
            PageLink { number: 2, active: false },
            PageLink { number: 3, active: false },
        ]
    );
    assert!(!bar.ellipsis);
}

#[test]
fn controls_last_page_hides_next() {
    let bar = controls(10, 3);
    assert!(bar.show_previous);
    assert!(!bar.show_next);
    assert!(bar.links[2].active);
}

#[test]
fn controls_cap_links_at_five_with_ellipsis() {
    let bar = controls(30, 7);
    let numbers: Vec<usize> = bar.links.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert!(bar.ellipsis);
    assert!(bar.links.iter().all(|l| !l.active));
    assert!(bar.show_previous);
    assert!(bar.show_next);
}

#[test]
fn controls_exactly_five_pages_has_no_ellipsis() {
    let bar = controls(20, 2);
    assert_eq!(bar.links.len(), 5);
    assert!(!bar.ellipsis);
}
