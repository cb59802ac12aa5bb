use super::*;
use crate::net::types::UserIdentity;

#[test]
fn owner_uses_email_and_display_label() {
    let session = Session {
        user: Some(UserIdentity {
            id: "u1".to_owned(),
            display_name: None,
            email: Some("kim@example.com".to_owned()),
            photo_url: None,
        }),
        loading: false,
    };
    assert_eq!(owner_of(&session), ("kim@example.com".to_owned(), "kim@example.com".to_owned()));
}

#[test]
fn signed_out_owner_is_blank() {
    assert_eq!(owner_of(&Session::default()), (String::new(), String::new()));
}

#[test]
fn owner_is_stamped_on_new_plant() {
    let session = Session {
        user: Some(UserIdentity {
            id: "u1".to_owned(),
            display_name: Some("Kim".to_owned()),
            email: Some("kim@example.com".to_owned()),
            photo_url: None,
        }),
        loading: false,
    };
    let (email, name) = owner_of(&session);
    let form = PlantForm { plant_name: "Fern".to_owned(), care_level: "easy".to_owned(), ..PlantForm::default() };
    let plant = form.to_new_plant(&email, &name).unwrap();
    assert_eq!(plant.user_email, "kim@example.com");
    assert_eq!(plant.user_name, "Kim");
}
