// File: src/screens/staking.rs

use dioxus::prelude::*;

use crate::components::pico::Container;
use crate::components::staking_hierarchy::StakingHierarchy;

#[component]
pub fn StakingScreen() -> Element {
    rsx! {
        Container {
            StakingHierarchy {}
        }
    }
}
