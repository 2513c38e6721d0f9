//! Attaching elements to host records through an attribute store.
//!
//! Uses the in-memory store; a real host would implement `AttributeStore`
//! over its own persistence (an item NBT container, a player profile, a
//! database row).

use elemental::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigBuilder::new()
        .with_element("fire")
        .with_element("ice")
        .with_relation("fire", "ice", Relation::Strong)
        .build()?;
    let context = init(config)?;

    // Host startup: choose the attribute key once, before any attach/read.
    context.init_store(AttributeKey::new("my_game", "element_id")?);

    let store = MemoryAttributeStore::new();

    let fire = context.element("fire").expect("seeded by config");
    context.attach_element(&store, "sword:excalibur", &fire).await?;
    info!("attached {} to sword:excalibur", fire);

    match context.read_element(&store, "sword:excalibur").await? {
        Some(element) => {
            let defender = context.element("ice").expect("seeded by config");
            let relation = context.relation(&element, &defender);
            info!(
                "sword element {} vs {}: damage x{}",
                element,
                defender,
                relation.multiplier()
            );
        }
        None => info!("sword carries no element"),
    }

    Ok(())
}
