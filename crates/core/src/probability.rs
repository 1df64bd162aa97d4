use crate::{DECK_SIZE, OPENING_HAND_SIZE};

/// Exact binomial coefficient. The multiplicative form keeps every
/// intermediate product divisible, so the integer division is lossless.
pub fn binomial(n: u32, k: u32) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 0..k as u128 {
        result = result * (n as u128 - i) / (i + 1);
    }
    result
}

/// Chance of drawing exactly `hits` hermits in a `sample`-card draw from a
/// `population`-card pool holding `hermits` of them. Impossible draws are 0.
fn hypergeometric(hermits: u32, sample: u32, hits: u32, population: u32) -> f64 {
    if hermits > population || sample > population || hits > sample || hits > hermits {
        return 0.0;
    }
    if sample - hits > population - hermits {
        return 0.0;
    }
    let favored = binomial(hermits, hits) * binomial(population - hermits, sample - hits);
    favored as f64 / binomial(population, sample) as f64
}

/// Chance the opening hand holds exactly `desired` hermits, conditioned on it
/// holding at least one (the game redraws zero-hermit hands).
fn opening_hand_chance(hermits_in_deck: u32, desired: u32) -> f64 {
    let valid: f64 = (1..=OPENING_HAND_SIZE.min(hermits_in_deck))
        .map(|hits| hypergeometric(hermits_in_deck, OPENING_HAND_SIZE, hits, DECK_SIZE))
        .sum();
    if valid == 0.0 {
        return 0.0;
    }
    hypergeometric(hermits_in_deck, OPENING_HAND_SIZE, desired, DECK_SIZE) / valid
}

/// Chance of holding at least `desired_hermits` hermits after the opening
/// hand plus `draws` further draws from a 42-card deck containing
/// `hermits_in_deck` of them. Out-of-domain queries are an impossible event,
/// not an error, and return exactly 0.
pub fn draw_probability(hermits_in_deck: u32, draws: u32, desired_hermits: u32) -> f64 {
    if desired_hermits > hermits_in_deck
        || hermits_in_deck > DECK_SIZE
        || draws > DECK_SIZE - OPENING_HAND_SIZE
        || draws + OPENING_HAND_SIZE < desired_hermits
    {
        return 0.0;
    }
    if desired_hermits == 0 {
        return 1.0;
    }

    let remaining = DECK_SIZE - OPENING_HAND_SIZE;
    let mut total = 0.0;
    for in_hand in 1..=OPENING_HAND_SIZE.min(hermits_in_deck) {
        let hand_chance = opening_hand_chance(hermits_in_deck, in_hand);
        if in_hand >= desired_hermits {
            total += hand_chance;
            continue;
        }
        let still_needed = desired_hermits - in_hand;
        let left_in_deck = hermits_in_deck - in_hand;
        let drawn: f64 = (still_needed..=draws.min(left_in_deck))
            .map(|hits| hypergeometric(left_in_deck, draws, hits, remaining))
            .sum();
        total += hand_chance * drawn;
    }
    total.clamp(0.0, 1.0)
}
