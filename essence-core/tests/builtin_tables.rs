use essence_core::{
    calculate, report, run, Catalogue, Collection, EssenceError, LockMode, PatternGroup, Wanted,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn names(group: &PatternGroup) -> Vec<&str> {
    group.items.iter().map(|i| i.name.as_str()).collect()
}

#[test]
fn normalizes_input_and_covers_every_area_in_table_order() {
    let catalogue = Catalogue::builtin();
    let calculation = run(
        &["Base:Intellect", "Additional:Attack", "Skill:Efficiency"],
        catalogue,
    )
    .unwrap();

    assert_eq!(
        calculation.wanted,
        Wanted {
            base: "Intellect Boost".into(),
            additional: "Attack Boost".into(),
            skill: "Efficiency".into(),
        }
    );

    let areas: Vec<&str> = calculation
        .results
        .iter()
        .map(|r| r.area_name.as_str())
        .collect();
    assert_eq!(
        areas,
        [
            "Hub Area",
            "Originium Research Park",
            "Mining Area",
            "Energy Highlands",
            "Wuling City"
        ]
    );
}

#[test]
fn oblivion_in_hub_area() {
    let calculation = run(
        &["Base:Intellect", "Additional:Arts DMG", "Skill:Nightfall"],
        Catalogue::builtin(),
    )
    .unwrap();
    let hub = &calculation.results[0];
    assert_eq!(hub.area_name, "Hub Area");
    assert_eq!(hub.groups.len(), 4);

    // Every group folds three triples, so first-seen order is kept.
    assert!(hub.groups.iter().all(|g| g.pattern_count == 3));

    let g = &hub.groups[0];
    assert_eq!(g.mode(), LockMode::AdditionalFixed);
    assert_eq!(names(g), ["Oblivion"]);
    assert_eq!(g.required_choices, strings(&["Intellect Boost"]));
    assert_eq!(
        g.variable_choices_list,
        vec![
            strings(&["Agility Boost", "Strength Boost"]),
            strings(&["Agility Boost", "Main Attribute Boost"]),
            strings(&["Main Attribute Boost", "Strength Boost"]),
        ]
    );

    let g = &hub.groups[1];
    assert_eq!(g.mode(), LockMode::AdditionalFixed);
    assert_eq!(names(g), ["Oblivion", "Copper Psalm"]);
    assert_eq!(g.required_choices, strings(&["Intellect Boost", "Will Boost"]));
    assert_eq!(g.by_rarity.six.len(), 1);
    assert_eq!(g.by_rarity.four[0].name, "Copper Psalm");

    let g = &hub.groups[2];
    assert_eq!(g.mode(), LockMode::SkillFixed);
    assert_eq!(names(g), ["Oblivion", "Night Heron", "Dusk Cutter"]);
    assert_eq!(g.required_choices, strings(&["Agility Boost", "Intellect Boost"]));

    let g = &hub.groups[3];
    assert_eq!(g.mode(), LockMode::SkillFixed);
    assert_eq!(names(g), ["Oblivion", "Dusk Cutter"]);
    assert_eq!(g.required_choices, strings(&["Intellect Boost"]));
}

#[test]
fn oblivion_in_wuling_city_and_nowhere_without_its_pools() {
    let calculation = run(
        &["Skill:Nightfall", "Base:Intellect", "Additional:Arts DMG"],
        Catalogue::builtin(),
    )
    .unwrap();

    let wuling = calculation
        .results
        .iter()
        .find(|r| r.area_name == "Wuling City")
        .unwrap();
    assert_eq!(wuling.groups.len(), 3);
    assert_eq!(wuling.groups[0].pattern_count, 6);
    assert_eq!(wuling.groups[0].mode(), LockMode::AdditionalFixed);
    assert_eq!(names(&wuling.groups[0]), ["Oblivion"]);
    assert_eq!(wuling.groups[0].base_choices_list.len(), 6);

    for name in ["Originium Research Park", "Mining Area", "Energy Highlands"] {
        let area = calculation
            .results
            .iter()
            .find(|r| r.area_name == name)
            .unwrap();
        assert!(area.groups.is_empty(), "{name} should have no groups");
    }
}

#[test]
fn unknown_values_give_empty_results_not_errors() {
    let calculation = run(
        &["Base:Charisma", "Additional:Luck", "Skill:Nothing"],
        Catalogue::builtin(),
    )
    .unwrap();
    assert_eq!(calculation.wanted.base, "Charisma Boost");
    assert_eq!(calculation.results.len(), 5);
    assert!(calculation.results.iter().all(|r| r.groups.is_empty()));
}

#[test]
fn validation_errors_stop_before_evaluation() {
    let catalogue = Catalogue::builtin();
    assert!(matches!(
        run(&["Base:Intellect", "Additional:Attack"], catalogue),
        Err(EssenceError::EntryCount(2))
    ));
    assert!(matches!(
        run(&["Base:Intellect", "Base:Strength", "Skill:Nightfall"], catalogue),
        Err(EssenceError::Cardinality)
    ));
    assert!(matches!(
        run(&["Base:Intellect", "Additional:Attack", "Other:Nightfall"], catalogue),
        Err(EssenceError::UnknownCategory(_))
    ));
    assert!(matches!(
        run(&["Base:Intellect", "Additional:Attack", "Nightfall"], catalogue),
        Err(EssenceError::Format(_))
    ));
}

#[test]
fn calculate_matches_run() {
    let catalogue = Catalogue::builtin();
    let calculation = run(
        &["Base:Agility", "Additional:Attack", "Skill:Assault"],
        catalogue,
    )
    .unwrap();
    assert_eq!(calculate(&calculation.wanted, catalogue), calculation.results);
}

#[test]
fn report_mentions_every_area() {
    let catalogue = Catalogue::builtin();
    let calculation = run(
        &["Base:Intellect", "Additional:Attack", "Skill:Efficiency"],
        catalogue,
    )
    .unwrap();
    let owned: Collection = ["Ember Script"].into_iter().collect();
    let text = report::render(&calculation, &owned);

    assert!(text.starts_with("Wanted drop:"));
    for area in catalogue.areas() {
        assert!(text.contains(&format!("== {} ==", area.name)));
    }
    assert!(text.contains("Ember Script [Arts Unit] (Intellect Boost, Attack Boost, Efficiency) [owned]"));
}

#[test]
fn calculation_serializes_to_json() {
    let calculation = run(
        &["Base:Intellect", "Additional:Arts DMG", "Skill:Nightfall"],
        Catalogue::builtin(),
    )
    .unwrap();
    let value = serde_json::to_value(&calculation).unwrap();
    assert_eq!(value["wanted"]["base"], "Intellect Boost");
    assert_eq!(value["results"][0]["area_name"], "Hub Area");
    assert_eq!(
        value["results"][0]["groups"][0]["lock"]["mode"],
        "additional-fixed"
    );
    assert_eq!(value["results"][0]["groups"][0]["items"][0]["class"], "arts-unit");
}
