use super::*;

#[test]
fn signed_out_visitors_see_only_public_links() {
    let links: Vec<AppRoute> = nav_links(false).collect();
    assert_eq!(links, vec![AppRoute::Home, AppRoute::AllPlants, AppRoute::About, AppRoute::Contact]);
}

#[test]
fn signed_in_users_also_see_dashboard_links() {
    let links: Vec<AppRoute> = nav_links(true).collect();
    assert_eq!(links, LINKS.to_vec());
    assert!(links.iter().any(AppRoute::is_guarded));
}
