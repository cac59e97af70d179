use timeline_core::{
    resolve_party, DisplayValue, Event, ImageRef, ImageSource, Individual, MediaCatalog, NoMedia,
    OpaqueRecord, Sex, Union, CLOSE_RELATIVE_MARKER,
};

fn ann() -> Individual {
    Individual::new("I1", "Ann Smith", "/tree/individual/I1").with_sex(Sex::Female)
}

fn bob() -> Individual {
    Individual::new("I2", "Bob Jones", "/tree/individual/I2").with_sex(Sex::Male)
}

fn carl() -> Individual {
    Individual::new("I3", "Carl Smith", "/tree/individual/I3").with_sex(Sex::Male)
}

fn marriage_of(husband: Individual, wife: Individual) -> Union {
    Union::new("F1", "Marriage", "/tree/family/F1")
        .with_husband(husband)
        .with_wife(wife)
}

#[test]
fn own_event_shows_sanitized_value_without_image() {
    let subject = ann();
    let event = Event::new(subject.clone(), "OCCU").with_value("<b>Teacher</b>");
    let resolved = resolve_party(&subject, &event, &NoMedia);
    assert_eq!(resolved.value, DisplayValue::text("Teacher"));
    assert_eq!(resolved.image, ImageRef::None);
}

#[test]
fn own_event_uses_attached_media() {
    let subject = ann();
    let media = MediaCatalog::new().with_media("M4", ImageSource::new("https://media/school.jpg"));
    let event = Event::new(subject.clone(), "EDUC")
        .with_value("High school")
        .with_payload("1 EDUC High school\n2 OBJE @M4@");
    let resolved = resolve_party(&subject, &event, &media);
    assert_eq!(resolved.image, ImageRef::Url("https://media/school.jpg".to_string()));
}

#[test]
fn own_birth_falls_back_to_portrait() {
    let subject = ann();
    let media = MediaCatalog::new().with_portrait("I1", ImageSource::new("https://media/ann.jpg"));
    let event = Event::new(subject.clone(), "BIRT");
    let resolved = resolve_party(&subject, &event, &media);
    assert_eq!(resolved.image, ImageRef::Url("https://media/ann.jpg".to_string()));
}

#[test]
fn union_event_shows_the_other_party_for_either_spouse() {
    let family = marriage_of(bob(), ann());
    let event = Event::new(family, "MARR");

    let as_wife = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(
        as_wife.value,
        DisplayValue::profile("Bob Jones", "/tree/individual/I2")
    );
    assert_eq!(
        as_wife.image,
        ImageRef::Icon("wt-individual-silhouette-m".to_string())
    );

    let as_husband = resolve_party(&bob(), &event, &NoMedia);
    assert_eq!(
        as_husband.value,
        DisplayValue::profile("Ann Smith", "/tree/individual/I1")
    );
}

#[test]
fn partner_portrait_is_preferred_over_silhouette() {
    let media = MediaCatalog::new().with_portrait("I2", ImageSource::new("https://media/bob.jpg"));
    let event = Event::new(marriage_of(bob(), ann()), "DIV");
    let resolved = resolve_party(&ann(), &event, &media);
    assert_eq!(resolved.image, ImageRef::Url("https://media/bob.jpg".to_string()));
}

#[test]
fn single_party_union_keeps_its_own_value() {
    let family = Union::new("F1", "Ann Smith", "/tree/family/F1").with_wife(ann());
    let event = Event::new(family, "RESI").with_value("Farmhouse");
    let resolved = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(resolved.value, DisplayValue::text("Farmhouse"));
    assert_eq!(resolved.image, ImageRef::None);
}

#[test]
fn other_individual_event_links_to_that_individual() {
    let event = Event::new(carl(), "DEAT");
    let resolved = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(
        resolved.value,
        DisplayValue::profile("Carl Smith", "/tree/individual/I3")
    );
    assert_eq!(
        resolved.image,
        ImageRef::Icon("wt-individual-silhouette-m".to_string())
    );
}

#[test]
fn third_party_marriage_resolves_opposing_spouse() {
    // Parents' marriage: the subject is not a party.
    let parents = marriage_of(carl(), bob());
    let event = Event::new(parents, "FAM:MARR");
    let resolved = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(
        resolved.value,
        DisplayValue::profile("Carl Smith", "/tree/individual/I3")
    );
}

#[test]
fn third_party_marriage_without_husband_uses_wife() {
    let widow = Union::new("F5", "Eve Doe", "/tree/family/F5")
        .with_wife(Individual::new("I5", "Eve Doe", "/tree/individual/I5"));
    let resolved = resolve_party(&ann(), &Event::new(widow, "MARR"), &NoMedia);
    assert_eq!(
        resolved.value,
        DisplayValue::profile("Eve Doe", "/tree/individual/I5")
    );
    assert_eq!(
        resolved.image,
        ImageRef::Icon("wt-individual-silhouette-u".to_string())
    );
}

#[test]
fn close_relative_marker_links_to_owning_record() {
    let household = Union::new("F9", "Carl Smith + Eve Doe", "/tree/family/F9").with_husband(carl());
    let event = Event::new(household, "RESI").with_value(CLOSE_RELATIVE_MARKER);
    let resolved = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(
        resolved.value,
        DisplayValue::profile("Carl Smith + Eve Doe", "/tree/family/F9")
    );
    assert_eq!(resolved.image, ImageRef::None);
}

#[test]
fn opaque_record_keeps_plain_value() {
    let census = OpaqueRecord::new("S1", "1900 census", "/tree/source/S1");
    let event = Event::new(census, "EVEN").with_value("Enumerated <i>at home</i>");
    let resolved = resolve_party(&ann(), &event, &NoMedia);
    assert_eq!(resolved.value, DisplayValue::text("Enumerated at home"));
    assert_eq!(resolved.image, ImageRef::None);
}
