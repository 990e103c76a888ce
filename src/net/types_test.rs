use super::*;

#[test]
fn workshop_deserializes_from_the_server_payload() {
    let raw = r#"{
        "workshopname": "Intro to Metalwork",
        "workshopstartdate": "2025-03-01",
        "workshopenddate": "2025-03-03"
    }"#;
    let workshop: Workshop = serde_json::from_str(raw).unwrap();
    assert_eq!(workshop.workshopname, "Intro to Metalwork");
    assert_eq!(workshop.workshopstartdate, "2025-03-01");
    assert_eq!(workshop.workshopenddate, "2025-03-03");
}

#[test]
fn workshop_list_deserializes_from_a_json_array() {
    let raw = r#"[
        {"workshopname": "A", "workshopstartdate": "2025-01-01", "workshopenddate": "2025-01-02"},
        {"workshopname": "B", "workshopstartdate": "2025-02-01", "workshopenddate": "2025-02-02"}
    ]"#;
    let workshops: Vec<Workshop> = serde_json::from_str(raw).unwrap();
    assert_eq!(workshops.len(), 2);
    assert_eq!(workshops[1].workshopname, "B");
}

#[test]
fn date_range_joins_start_and_end() {
    let workshop = Workshop {
        workshopname: "A".to_string(),
        workshopstartdate: "2025-01-01".to_string(),
        workshopenddate: "2025-01-02".to_string(),
    };
    assert_eq!(workshop.date_range(), "2025-01-01 - 2025-01-02");
}
