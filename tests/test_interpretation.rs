use shadow_soul::interpretation::*;
use shadow_soul::types::{Direction, Footwear, Interpretation};

fn titles(lengths: &[f64]) -> Vec<String> {
    lengths
        .iter()
        .map(|&l| select(l, Direction::South, Footwear::Vans).title)
        .collect()
}

fn icons(i: &Interpretation) -> Vec<&str> {
    i.traits.iter().map(|t| t.icon_key.as_str()).collect()
}

// ── Banding ──

#[test]
fn test_band_boundaries() {
    assert_eq!(Band::for_length(0.0), Band::Focused);
    assert_eq!(Band::for_length(1.999_999), Band::Focused);
    assert_eq!(Band::for_length(2.0), Band::Balanced);
    assert_eq!(Band::for_length(4.999_999), Band::Balanced);
    assert_eq!(Band::for_length(5.0), Band::Profound);
    assert_eq!(Band::for_length(1_000.0), Band::Profound);
}

#[test]
fn test_band_degenerate_lengths_focused() {
    assert_eq!(Band::for_length(-1.0), Band::Focused);
    assert_eq!(Band::for_length(f64::NAN), Band::Focused);
    assert_eq!(Band::for_length(f64::INFINITY), Band::Profound);
}

#[test]
fn test_titles_by_band() {
    assert_eq!(
        titles(&[1.5, 2.0, 5.0]),
        vec![
            "The Focused Soul",
            "The Balanced Wanderer",
            "The Profound Dreamer"
        ]
    );
}

// ── Descriptions ──

#[test]
fn test_focused_description() {
    let i = select(1.5, Direction::East, Footwear::NewBalance);
    assert_eq!(i.title, "The Focused Soul");
    assert_eq!(
        i.description,
        "Your shadow measures 1.50 feet, revealing a soul that stands tall in the light of truth. \
         Like a sundial at noon, you cast minimal shadows because you face life directly. \
         Your New Balance shoes ground you to reality while your spirit reaches for clarity."
    );
}

#[test]
fn test_balanced_description_mentions_direction() {
    let i = select(3.0, Direction::Northeast, Footwear::Nike);
    assert_eq!(
        i.description,
        "At 3.00 feet, your shadow speaks of perfect equilibrium between earth and sky. \
         Facing northeast, you navigate life with measured steps in your Nike shoes, \
         leaving a meaningful impression on the world."
    );
}

#[test]
fn test_profound_description() {
    let i = select(12.346, Direction::West, Footwear::Other);
    assert_eq!(
        i.description,
        "Your 12.35-foot shadow stretches across the earth like a bridge between worlds. \
         In your Other shoes, you carry dreams that cast long shadows, \
         influencing far more than your immediate presence suggests."
    );
}

#[test]
fn test_direction_only_matters_for_balanced() {
    let a = select(1.0, Direction::North, Footwear::Puma);
    let b = select(1.0, Direction::Southwest, Footwear::Puma);
    assert_eq!(a, b);

    let a = select(7.0, Direction::North, Footwear::Puma);
    let b = select(7.0, Direction::Southwest, Footwear::Puma);
    assert_eq!(a, b);

    for d in Direction::ALL {
        let i = select(2.5, d, Footwear::Puma);
        assert!(
            i.description.contains(&format!("Facing {},", d.label().to_lowercase())),
            "{}",
            i.description
        );
    }
}

// ── Traits ──

#[test]
fn test_trait_sets() {
    let focused = select(0.5, Direction::North, Footwear::Adidas);
    let balanced = select(2.0, Direction::North, Footwear::Adidas);
    let profound = select(9.0, Direction::North, Footwear::Adidas);
    assert_eq!(icons(&focused), ["arrow-right", "eye", "circle"]);
    assert_eq!(icons(&balanced), ["scale", "book", "trending-up"]);
    assert_eq!(icons(&profound), ["telescope", "ripple", "layers"]);

    let names: Vec<&str> = profound.traits.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["Vision", "Influence", "Depth"]);
    assert_eq!(balanced.traits[1].description, "Your choices reflect deep thought");
}

#[test]
fn test_always_three_traits() {
    for l in [0.0, 1.0, 2.0, 4.9, 5.0, 50.0] {
        assert_eq!(select(l, Direction::South, Footwear::Reebok).traits.len(), 3);
    }
}

#[test]
fn test_select_deterministic() {
    let a = select(4.2, Direction::Southeast, Footwear::Converse);
    let b = select(4.2, Direction::Southeast, Footwear::Converse);
    assert_eq!(a, b);
}

// ── Sharing / serialization ──

#[test]
fn test_share_text() {
    let i = select(6.0, Direction::North, Footwear::Vans);
    assert_eq!(i.share_text(), format!("The Profound Dreamer\n\n{}", i.description));
}

#[test]
fn test_trait_icon_serialized_as_icon() {
    let i = select(1.0, Direction::North, Footwear::Vans);
    let json = serde_json::to_value(&i).unwrap();
    assert_eq!(json["traits"][0]["icon"], "arrow-right");
    assert_eq!(json["traits"][0]["name"], "Directness");
}
