//! Bounding box probe
//!
//! Loads a link description (TOML or RON), builds its collisions and prints
//! the local and world bounding box of each one.
//!
//! ```text
//! bbox_probe bbox_probe/link.toml
//! ```

use collision_bridge::foundation::logging;
use collision_bridge::prelude::*;

#[derive(thiserror::Error, Debug)]
enum ProbeError {
    #[error("usage: bbox_probe <link.toml|link.ron>")]
    Usage,
}

fn format_box(aabb: &Aabb) -> String {
    format!(
        "[{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        aabb.min.x, aabb.min.y, aabb.min.z, aabb.max.x, aabb.max.y, aabb.max.z
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_with_filter("info");

    let path = std::env::args().nth(1).ok_or(ProbeError::Usage)?;
    let config = LinkConfig::load_from_file(&path)?;
    let link = Link::from_config(&config)?;

    println!("=== Link `{}` ({} collisions) ===", link.name(), link.len());
    for (_, collision) in link.collisions() {
        println!("{}", collision.name());
        match collision.try_bounding_box() {
            Ok(local) => {
                println!("  local: {}", format_box(&local));
                let world = local.transformed(&collision.world_pose());
                println!("  world: {}", format_box(&world));
            }
            Err(err) => {
                log::warn!("{err}");
                println!("  no geometry");
            }
        }
    }

    match link.bounding_box() {
        Some(aabb) => println!("link:    {}", format_box(&aabb)),
        None => println!("link:    empty"),
    }
    Ok(())
}
