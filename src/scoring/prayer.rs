use crate::config::WeightConfig;
use crate::models::PrayerObservation;

/// Points earned by a single obligatory prayer.
///
/// Presence scales only the obligatory part; surrounding deeds are flat. A
/// burdened day keeps presence penalties but earns no presence bonus.
pub fn score_prayer(observation: &PrayerObservation, has_burden: bool, config: &WeightConfig) -> f64 {
    if !observation.performed {
        return 0.0;
    }

    let base = if observation.in_congregation {
        config.fard_congregation
    } else {
        config.fard_solo
    };

    let mut multiplier = config.presence_multiplier(observation.presence);
    if has_burden && multiplier > 0.0 {
        multiplier = 0.0;
    }
    let fard = base * (1.0 + multiplier);

    let surrounding: f64 = observation
        .surrounding_deed_ids
        .iter()
        .map(|id| config.surrounding_weight(id))
        .sum();

    fard + surrounding
}
