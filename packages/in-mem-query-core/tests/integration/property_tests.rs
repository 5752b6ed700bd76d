//! Fetch-mode properties over randomized stores and predicate lists.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use in_mem_query_core::{member, EntityStore, Predicate, QueryError, QueryExecutor, TeamId};

fn random_store(rng: &mut StdRng) -> anyhow::Result<EntityStore> {
    let mut store = EntityStore::new();
    let teams: Vec<TeamId> = (0..3)
        .map(|i| store.insert_team(format!("team{}", i)))
        .collect::<Result<_, _>>()?;

    for i in 0..rng.gen_range(0..40) {
        let username = format!("user{}", rng.gen_range(0..10));
        let age = rng.gen_range(0..60);
        if i % 7 == 0 {
            store.insert_unassigned_member(username, age)?;
        } else {
            store.insert_member(username, age, teams[rng.gen_range(0..teams.len())])?;
        }
    }
    Ok(store)
}

fn random_predicate(rng: &mut StdRng) -> Predicate {
    let age = rng.gen_range(0..60);
    let name = format!("user{}", rng.gen_range(0..10));
    match rng.gen_range(0..10) {
        0 => member::username().eq(name),
        1 => member::username().ne(name),
        2 => member::age().goe(age),
        3 => member::age().lt(age),
        4 => member::age().between(age, age + rng.gen_range(0..20)),
        5 => member::age().is_in([age, age + 1, age + 2]),
        6 => member::team().eq(TeamId(rng.gen_range(1..=3))),
        7 => member::team().is_null(),
        8 => member::username().like("user_"),
        _ => member::username().starts_with(name).not(),
    }
}

#[test]
fn test_fetch_mode_properties() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let store = random_store(&mut rng)?;
        let executor = QueryExecutor::new(&store);
        let predicates: Vec<Predicate> = (0..rng.gen_range(0..3))
            .map(|_| random_predicate(&mut rng))
            .collect();

        let all = executor.fetch(&predicates);
        let count = executor.fetch_count(&predicates);
        assert_eq!(count, all.len());

        // Insertion order is preserved
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        match executor.fetch_first(&predicates) {
            Ok(first) => assert_eq!(first, all[0]),
            Err(e) => {
                assert_eq!(e, QueryError::NoResult);
                assert!(all.is_empty());
            }
        }

        match executor.fetch_one(&predicates) {
            Ok(one) => assert_eq!(vec![one], all),
            Err(e) => assert_eq!(e, QueryError::NonUniqueResult { count }),
        }

        let offset = rng.gen_range(0..10);
        let limit = rng.gen_range(0..10);
        let page = executor.fetch_results(&predicates, Some(offset), Some(limit));
        assert_eq!(page.total, count);
        let expected: Vec<_> = all.iter().skip(offset).take(limit).copied().collect();
        assert_eq!(page.results, expected);
    }
    Ok(())
}

#[test]
fn test_empty_where_returns_everything() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let store = random_store(&mut rng)?;
        let executor = QueryExecutor::new(&store);

        let all: Vec<_> = store.all_members().iter().collect();
        assert_eq!(executor.fetch(&[]), all);
    }
    Ok(())
}
