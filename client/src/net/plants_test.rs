use futures::executor::block_on;

use super::*;

fn plant(id: &str, level: CareLevel, next: &str, owner: &str) -> Plant {
    Plant {
        id: id.to_owned(),
        details: NewPlant {
            image: String::new(),
            plant_name: format!("plant {id}"),
            category: "succulent".to_owned(),
            description: String::new(),
            care_level: level,
            watering_frequency: "weekly".to_owned(),
            last_watered_date: String::new(),
            next_watering_date: next.to_owned(),
            health_status: "healthy".to_owned(),
            user_email: owner.to_owned(),
            user_name: String::new(),
        },
    }
}

fn ids(plants: &[Plant]) -> Vec<&str> {
    plants.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(plants_endpoint("https://api.test"), "https://api.test/plants");
    assert_eq!(plant_endpoint("https://api.test", "abc123"), "https://api.test/plants/abc123");
    assert_eq!(
        my_plants_endpoint("https://api.test", "ana+1@example.com"),
        "https://api.test/my-plants?email=ana%2B1%40example.com"
    );
}

#[test]
fn plant_endpoint_escapes_path_segment() {
    assert_eq!(plant_endpoint("https://api.test", "../x"), "https://api.test/plants/..%2Fx");
}

#[test]
fn sort_by_next_watering_puts_undated_last() {
    let mut plants = vec![
        plant("a", CareLevel::Easy, "", ""),
        plant("b", CareLevel::Easy, "2025-07-01", ""),
        plant("c", CareLevel::Easy, "2025-06-15", ""),
    ];
    sort_plants(&mut plants, PlantSort::NextWatering);
    assert_eq!(ids(&plants), vec!["c", "b", "a"]);
}

#[test]
fn sort_by_care_level_is_stable() {
    let mut plants = vec![
        plant("a", CareLevel::Difficult, "", ""),
        plant("b", CareLevel::Easy, "", ""),
        plant("c", CareLevel::Moderate, "", ""),
        plant("d", CareLevel::Easy, "", ""),
    ];
    sort_plants(&mut plants, PlantSort::CareLevel);
    assert_eq!(ids(&plants), vec!["b", "d", "c", "a"]);
}

#[test]
fn default_sort_keeps_service_order() {
    let mut plants = vec![plant("b", CareLevel::Difficult, "", ""), plant("a", CareLevel::Easy, "", "")];
    sort_plants(&mut plants, PlantSort::Default);
    assert_eq!(ids(&plants), vec!["b", "a"]);
}

#[test]
fn sort_keys_round_trip_and_fall_back() {
    for sort in PlantSort::ALL {
        assert_eq!(PlantSort::from_key(sort.key()), sort);
    }
    assert_eq!(PlantSort::from_key("bogus"), PlantSort::Default);
}

#[test]
fn needs_water_on_or_before_today() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10);
    assert!(needs_water(&plant("a", CareLevel::Easy, "2025-06-09", ""), today));
    assert!(needs_water(&plant("b", CareLevel::Easy, "2025-06-10", ""), today));
    assert!(!needs_water(&plant("c", CareLevel::Easy, "2025-06-11", ""), today));
    assert!(!needs_water(&plant("d", CareLevel::Easy, "", ""), today));
}

#[test]
fn needs_water_ignores_unparseable_dates_and_unknown_today() {
    let today = NaiveDate::from_ymd_opt(2025, 6, 10);
    assert!(!needs_water(&plant("a", CareLevel::Easy, "2025-02-31", ""), today));
    assert!(!needs_water(&plant("b", CareLevel::Easy, "soon", ""), today));
    assert!(!needs_water(&plant("c", CareLevel::Easy, "2025-06-01", ""), None));
}

#[test]
fn sort_by_next_watering_compares_calendar_dates() {
    let mut plants = vec![
        plant("a", CareLevel::Easy, "2025-12-01", ""),
        plant("b", CareLevel::Easy, "2025-02-31", ""),
        plant("c", CareLevel::Easy, "2025-09-30", ""),
        plant("d", CareLevel::Easy, "2024-12-31", ""),
    ];
    sort_plants(&mut plants, PlantSort::NextWatering);
    assert_eq!(ids(&plants), vec!["d", "c", "a", "b"]);
}

#[test]
fn newest_takes_tail_in_reverse() {
    let plants = vec![
        plant("a", CareLevel::Easy, "", ""),
        plant("b", CareLevel::Easy, "", ""),
        plant("c", CareLevel::Easy, "", ""),
    ];
    assert_eq!(ids(&newest(&plants, 2)), vec!["c", "b"]);
    assert_eq!(newest(&plants, 10).len(), 3);
}

#[test]
fn stats_count_owner_case_insensitively() {
    let plants = vec![
        plant("a", CareLevel::Difficult, "2025-06-01", "Ana@Example.com"),
        plant("b", CareLevel::Easy, "2025-07-01", "leo@example.com"),
        plant("c", CareLevel::Moderate, "", "ana@example.com"),
    ];
    let stats = plant_stats(&plants, Some("ana@example.com"), NaiveDate::from_ymd_opt(2025, 6, 10));
    assert_eq!(stats, PlantStats { total: 3, mine: 2, needs_water: 1, difficult: 1 });
    assert_eq!(plant_stats(&plants, None, NaiveDate::from_ymd_opt(2025, 6, 10)).mine, 0);
}

#[test]
fn fetch_is_unavailable_outside_the_browser() {
    let err = block_on(fetch_plant("https://api.test", "p1")).unwrap_err();
    assert_eq!(err, DataFetchError::Unavailable);
}
