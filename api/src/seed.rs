//! Startup population of the store with synthetic customers.

use futures::future::join_all;
use rand::{seq::SliceRandom, Rng};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::{random::Entropy, store::Store};

/// Customers created at startup unless configured otherwise.
pub const DEFAULT_SEED_COUNT: usize = 1000;

const FIRST_NAMES: &[&str] = &[
    "Alexander", "Andrea", "Anja", "Anna", "Bernd", "Birgit", "Christian", "Claudia", "Daniel",
    "Dieter", "Elke", "Emil", "Emma", "Finn", "Frank", "Friedrich", "Gabriele", "Gerhard", "Greta",
    "Hannah", "Hans", "Heike", "Helga", "Ingrid", "Jan", "Jana", "Jonas", "Jürgen", "Karin",
    "Karl", "Katharina", "Klaus", "Lara", "Lena", "Leon", "Lukas", "Maria", "Marie", "Markus",
    "Martin", "Matthias", "Mia", "Michael", "Monika", "Niklas", "Paul", "Petra", "Ralf", "Renate",
    "Sabine", "Sebastian", "Sophie", "Stefan", "Susanne", "Thomas", "Tobias", "Ursula", "Uwe",
    "Werner", "Wolfgang",
];

/// Outcome of a joined batch of creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub failed: usize,
}

pub fn first_name(rng: &mut impl Rng) -> &'static str {
    FIRST_NAMES.choose(rng).copied().unwrap_or("Anna")
}

/// Spawns one independent create per name. Each task reports whether its
/// create succeeded; a failed create is dropped.
pub fn submit(store: &Store, count: usize, entropy: &Entropy) -> Vec<JoinHandle<bool>> {
    let mut rng = entropy.rng();

    (0..count)
        .map(|_| {
            let store = store.clone();
            let name = first_name(&mut rng);

            tokio::spawn(async move {
                match store.save(name).await {
                    Ok(_) => true,
                    Err(e) => {
                        debug!("dropped seed customer {name}: {e}");
                        false
                    },
                }
            })
        })
        .collect()
}

/// Fire-and-forget: submits `count` creates without waiting for any of them.
pub fn seed(store: &Store, count: usize, entropy: &Entropy) {
    let handles = submit(store, count, entropy);

    info!(count = handles.len(), "seeding customers");
}

/// Submits `count` creates and waits for all of them.
pub async fn seed_and_report(store: &Store, count: usize, entropy: &Entropy) -> SeedReport {
    join_all(submit(store, count, entropy))
        .await
        .into_iter()
        .fold(SeedReport::default(), |mut report, outcome| {
            if matches!(outcome, Ok(true)) {
                report.created += 1;
            } else {
                report.failed += 1;
            }

            report
        })
}
