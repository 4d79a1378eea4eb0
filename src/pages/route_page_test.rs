use super::*;

#[test]
fn page_title_uses_catalog_title() {
    assert_eq!(page_title("/c/orders"), "My orders");
    assert_eq!(page_title("/merchant/stats/"), "Store statistics");
}

#[test]
fn page_title_unknown_path() {
    assert_eq!(page_title("/nowhere"), NOT_FOUND_TITLE);
}

#[test]
fn area_links_skip_aliases() {
    let links = area_links(Area::Console);
    assert!(links.iter().all(|route| route.kind == RouteKind::Page));
    assert!(!links.iter().any(|route| route.path == "/commission"));
    assert_eq!(links.first().map(|route| route.path), Some("/"));
}

#[test]
fn area_links_rider_area() {
    let paths: Vec<_> = area_links(Area::Rider).into_iter().map(|route| route.path).collect();
    assert_eq!(paths, ["/d", "/d/hall"]);
}

#[test]
fn sign_out_hidden_on_public_screens() {
    assert!(!shows_sign_out("/restaurant/apply"));
    assert!(!shows_sign_out("/customer/register"));
}

#[test]
fn sign_out_shown_on_private_screens() {
    assert!(shows_sign_out("/"));
    assert!(shows_sign_out("/d/hall"));
    assert!(shows_sign_out("/nowhere"));
}
