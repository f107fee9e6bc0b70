use super::*;

// =============================================================
// aria_label
// =============================================================

#[test]
fn aria_label_text_only() {
    assert_eq!(aria_label("Blog", "", false, LinkKind::TextLink), "Blog");
}

#[test]
fn aria_label_with_description() {
    assert_eq!(aria_label("Blog", "Weekly notes", false, LinkKind::TextLink), "Blog - Weekly notes");
}

#[test]
fn aria_label_external_image_card() {
    assert_eq!(
        aria_label("Shop", "Prints", true, LinkKind::ImageCard),
        "Shop - Prints (opens in new tab) (image link)"
    );
}

#[test]
fn aria_label_trims_and_skips_blank_description() {
    assert_eq!(aria_label("  Blog ", "   ", true, LinkKind::TextLink), "Blog (opens in new tab)");
}

// =============================================================
// tracking / prefetch / tab order
// =============================================================

#[test]
fn tracking_label_falls_back_when_blank() {
    assert_eq!(tracking_label(" Blog "), "Blog");
    assert_eq!(tracking_label("  "), UNKNOWN_LINK_LABEL);
}

#[test]
fn link_kind_names_match_analytics_vocabulary() {
    assert_eq!(LinkKind::TextLink.as_str(), "text_link");
    assert_eq!(LinkKind::ImageCard.as_str(), "image_card");
    assert_eq!(LinkKind::default(), LinkKind::TextLink);
}

#[test]
fn prefetch_only_for_http_links() {
    assert!(should_prefetch("https://example.com"));
    assert!(should_prefetch("http://example.com/page"));
    assert!(!should_prefetch("mailto:hi@example.com"));
    assert!(!should_prefetch("/about"));
    assert!(!should_prefetch("https://example.com/?to=mailto:hi@example.com"));
}

#[test]
fn socials_come_before_links_in_tab_order() {
    assert_eq!(social_tab_index(0), 1);
    assert_eq!(social_tab_index(2), 3);
    assert_eq!(link_tab_index(3, 0), 4);
    assert_eq!(link_tab_index(0, 0), 1);
}

#[test]
fn anchor_target_skips_routes_and_non_fragments() {
    assert_eq!(anchor_target("#faq"), Some("faq"));
    assert_eq!(anchor_target("#contact-form"), Some("contact-form"));
    assert_eq!(anchor_target("#contact"), None);
    assert_eq!(anchor_target("#about"), None);
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("/mission#faq"), None);
    assert_eq!(anchor_target("https://example.com#faq"), None);
}
