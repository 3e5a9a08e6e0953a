use anyhow::Result;
use custom_controls::controls::{
    ConflictPolicy, ControlsConfig, ControlsManager, InputId, PlayerSlot, VanillaAction,
};
use custom_controls::layout::Direction;
use custom_controls::ActionId;
use log::info;
use winit::keyboard::KeyCode;

/// Loadout hotkeys registered per player, as the loadout mod does
const LOADOUT_COUNT: usize = 3;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting controls session...");

    let config = ControlsConfig::default().with_unbind_input(KeyCode::Backspace);
    let mut controls: ControlsManager = ControlsManager::in_memory(config);
    controls.register_vanilla()?;

    for index in 0..controls.num_players() {
        let player = PlayerSlot::new(index);
        controls.register_custom(player, "Next Loadout")?;
        for loadout in 1..=LOADOUT_COUNT {
            controls.register_custom(player, &format!("Loadout {loadout}"))?;
        }
    }

    let p1 = PlayerSlot::new(0);
    let dash = ActionId::vanilla(p1, VanillaAction::Dash);
    let next = controls
        .registry()
        .find_custom(p1, "Next Loadout")
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Next Loadout was not registered"))?;

    controls.assign(&dash, InputId::from(KeyCode::Space))?;
    controls.assign(&next, InputId::from(KeyCode::Tab))?;

    for policy in ConflictPolicy::ALL {
        controls.set_policy(policy);
        let changes = controls.assign(&next, InputId::from(KeyCode::Space))?;
        for change in &changes {
            info!(
                "[{}] {} : {} -> {}",
                policy,
                controls.label(&change.action),
                change.old,
                change.new
            );
        }
        // Put things back for the next policy
        controls.set_policy(ConflictPolicy::Duplicate);
        controls.assign(&dash, InputId::from(KeyCode::Space))?;
        controls.assign(&next, InputId::from(KeyCode::Tab))?;
    }

    let layout = controls.layout_for(p1)?;
    if let Some(shape) = layout.shape {
        info!(
            "Rebind menu: {} buttons in {} columns x {} rows",
            layout.len(),
            shape.columns,
            shape.rows
        );
    }
    for (index, action) in controls.all_actions(p1)?.enumerate() {
        let placement = &layout.placements[index];
        info!(
            "{:>2} {:<14} {:<8} at {:?}, right -> {:?}",
            index,
            controls.label(action),
            controls.binding_label(action)?,
            placement.anchor,
            layout.navigation.neighbor(index, Direction::Right)
        );
    }

    Ok(())
}
