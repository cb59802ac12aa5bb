use super::*;

#[test]
fn public_paths_resolve() {
    assert_eq!(resolve("/"), AppRoute::Home);
    assert_eq!(resolve("/login"), AppRoute::Login);
    assert_eq!(resolve("/signup/"), AppRoute::Signup);
    assert_eq!(resolve("/about"), AppRoute::About);
    assert_eq!(resolve("/contact"), AppRoute::Contact);
    assert_eq!(resolve("/support"), AppRoute::Support);
    assert_eq!(resolve("/all-plants?sort=care-level"), AppRoute::AllPlants);
    assert_eq!(resolve("/auth/callback#id_token=x"), AppRoute::AuthCallback);
}

#[test]
fn dashboard_paths_resolve_and_are_guarded() {
    let cases = [
        ("/dashboard", AppRoute::Dashboard),
        ("/dashboard/all-plants", AppRoute::DashboardAllPlants),
        ("/dashboard/add-plant", AppRoute::AddPlant),
        ("/dashboard/my-plants", AppRoute::MyPlants),
        ("/dashboard/user-profile", AppRoute::UserProfile),
        ("/dashboard/update-plant/abc", AppRoute::UpdatePlant("abc".to_owned())),
        ("/dashboard/plant-details/abc", AppRoute::PlantDetails("abc".to_owned())),
    ];
    for (path, route) in cases {
        let resolved = resolve(path);
        assert_eq!(resolved, route, "{path}");
        assert!(resolved.is_guarded(), "{path} should be guarded");
    }
}

#[test]
fn public_routes_are_not_guarded() {
    for path in ["/", "/login", "/signup", "/all-plants", "/auth/callback", "/nope"] {
        assert!(!resolve(path).is_guarded(), "{path}");
    }
}

#[test]
fn unmatched_paths_resolve_to_not_found() {
    assert_eq!(resolve("/nonexistent"), AppRoute::NotFound);
    assert_eq!(resolve("/dashboard/update-plant"), AppRoute::NotFound);
    assert_eq!(resolve("/dashboard/plant-details/a/b"), AppRoute::NotFound);
    assert_eq!(resolve("/login/extra"), AppRoute::NotFound);
}

#[test]
fn href_round_trips_through_resolve() {
    let routes = [
        AppRoute::Home,
        AppRoute::MyPlants,
        AppRoute::UpdatePlant("id with space".to_owned()),
        AppRoute::PlantDetails("665f".to_owned()),
    ];
    for route in routes {
        assert_eq!(resolve(&route.href()), route);
    }
}

#[test]
fn titles_cover_shared_pages() {
    assert_eq!(AppRoute::AllPlants.title(), AppRoute::DashboardAllPlants.title());
    assert_eq!(resolve("/missing").title(), "Not Found");
}
