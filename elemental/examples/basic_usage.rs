//! Basic usage example for Elemental

use elemental::prelude::*;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = ConfigBuilder::development().build()?;
    let context = init(config)?;

    // Register a small element set. The first registration wins and becomes
    // the default element.
    context.register(Element::new("fire")?.with_display_name("Fire"));
    context.register(Element::new("water")?.with_display_name("Water"));
    context.register(Element::new("grass")?.with_display_name("Grass"));

    info!(
        "registered {} elements, default is {}",
        context.element_count(),
        context.default_element().expect("elements were registered")
    );

    // Each call stores both directions at once.
    context.set_relation_between("fire", "grass", Relation::Strong)?;
    context.set_relation_between("water", "fire", Relation::Strong)?;
    context.set_relation_between("water", "grass", Relation::Weak)?;

    for (from, to) in [
        ("fire", "grass"),
        ("grass", "fire"),
        ("water", "fire"),
        ("fire", "water"),
        ("grass", "water"),
        ("fire", "fire"),
    ] {
        let relation = context.relation_between(from, to);
        info!(
            "{} -> {}: {} (damage x{})",
            from,
            to,
            relation,
            relation.multiplier()
        );
    }

    Ok(())
}
