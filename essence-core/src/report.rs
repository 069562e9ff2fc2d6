use crate::catalogue::{Category, Item};
use crate::collection::Collection;
use crate::consolidate::PatternGroup;
use crate::lock::Lock;
use crate::wanted::Wanted;
use crate::{AreaResult, Calculation};

/// Plain-text rendering of a calculation, one block per area.
pub fn render(calculation: &Calculation, owned: &Collection) -> String {
    let mut out = String::new();
    let wanted = &calculation.wanted;

    out.push_str("Wanted drop:\n");
    for category in Category::ALL {
        out.push_str(&format!(
            "  {}: {}\n",
            category.label(),
            wanted.value(category)
        ));
    }
    out.push('\n');

    let areas: Vec<String> = calculation
        .results
        .iter()
        .map(|area| render_area(area, wanted, owned))
        .collect();
    out.push_str(&areas.join("\n"));
    out
}

pub fn render_area(area: &AreaResult, wanted: &Wanted, owned: &Collection) -> String {
    let mut out = format!("== {} ==\n", area.area_name);

    if area.groups.is_empty() {
        out.push_str("none\n");
        return out;
    }

    for group in &area.groups {
        render_group(&mut out, group, wanted, owned);
        out.push('\n');
    }
    out
}

fn render_group(out: &mut String, group: &PatternGroup, wanted: &Wanted, owned: &Collection) {
    out.push_str(&format!(
        "[{}] {} pattern(s)\n",
        group.mode().as_str(),
        group.pattern_count
    ));

    out.push_str("Base (pick 3) candidates:\n");
    for triple in &group.base_choices_list {
        out.push_str(&format!("  - {}\n", triple.join(", ")));
    }
    if !group.required_choices.is_empty() {
        out.push_str(&format!(
            "Base required: {}\n",
            group.required_choices.join(", ")
        ));
    }

    match &group.lock {
        Lock::Additional(value) => {
            out.push_str(&format!("Additional (fixed): {value}\n"));
            out.push_str(&format!(
                "Skill (random): from area pool (want: {})\n",
                wanted.skill
            ));
        }
        Lock::Skill(value) => {
            out.push_str(&format!("Skill (fixed): {value}\n"));
            out.push_str(&format!(
                "Additional (random): from area pool (want: {})\n",
                wanted.additional
            ));
        }
    }

    for (tier, items) in group.by_rarity.tiers() {
        out.push_str(&format!("* {}\n", tier.heading()));
        for item in items {
            out.push_str(&format!("  - {}\n", item_line(item, owned)));
        }
    }
}

fn item_line(item: &Item, owned: &Collection) -> String {
    let mut line = format!(
        "{} [{}] ({}, {}, {})",
        item.name,
        item.class.label(),
        item.base,
        item.additional,
        item.skill
    );
    if owned.is_owned(&item.name) {
        line.push_str(" [owned]");
    }
    line
}
