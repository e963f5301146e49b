//! Neural-network activation map generator.
//!
//! Produces the scatter data behind the "activation map" visualization:
//! one record per neuron with a random activation level, plus summary
//! stats. Input and output layers render narrower than the hidden layers.

use rand::Rng;
use serde::Serialize;

/// Narrow-layer floor for the input/output rows.
const MIN_EDGE_NEURONS: u32 = 8;

/// Role of a layer in the rendered map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// One neuron in the activation scatter plot.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NeuronActivation {
    pub layer: u32,
    pub neuron: u32,
    /// Activation level in [0.1, 1.0].
    pub activation: f64,
    pub kind: LayerKind,
}

/// Summary stats shown under the map.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct NetworkStats {
    pub total_neurons: u32,
    pub total_layers: u32,
    pub mean_activation: f64,
    /// Cosmetic efficiency figure, 85..=98%.
    pub efficiency_pct: f64,
}

/// Full activation map payload.
#[derive(Clone, Debug, Serialize)]
pub struct ActivationMap {
    pub neurons: Vec<NeuronActivation>,
    pub stats: NetworkStats,
}

/// Generate an activation map for a network of `hidden_layers` layers of
/// `neurons_per_layer` neurons, bracketed by input/output layers at a
/// quarter width (floor of 8).
pub fn activation_map(rng: &mut impl Rng, hidden_layers: u32, neurons_per_layer: u32) -> ActivationMap {
    let total_layers = hidden_layers + 2;
    let edge_width = (neurons_per_layer / 4).max(MIN_EDGE_NEURONS);

    let mut neurons = Vec::new();
    for layer in 0..total_layers {
        let kind = if layer == 0 {
            LayerKind::Input
        } else if layer == total_layers - 1 {
            LayerKind::Output
        } else {
            LayerKind::Hidden
        };
        let width = if kind == LayerKind::Hidden { neurons_per_layer } else { edge_width };
        for neuron in 0..width {
            neurons.push(NeuronActivation {
                layer,
                neuron,
                activation: rng.random_range(0.1..=1.0),
                kind,
            });
        }
    }

    let total_neurons = u32::try_from(neurons.len()).unwrap_or(u32::MAX);
    let mean_activation = if neurons.is_empty() {
        0.0
    } else {
        neurons.iter().map(|n| n.activation).sum::<f64>() / f64::from(total_neurons)
    };

    ActivationMap {
        neurons,
        stats: NetworkStats {
            total_neurons,
            total_layers,
            mean_activation,
            efficiency_pct: rng.random_range(85.0..=98.0),
        },
    }
}

#[cfg(test)]
#[path = "network_test.rs"]
mod tests;
