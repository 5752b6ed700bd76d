//! Basic scenarios: string query start, fluent start, search, result fetch.

use in_mem_query_core::{member, Predicate, QueryError};

use super::helpers::{usernames, Fixture};

#[test]
fn test_start_string_query() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    let found = fixture
        .store
        .query_factory()
        .create_query("select m from Member m where m.username=:username")?
        .set_parameter("username", "member1")?
        .get_single_result()?;

    assert_eq!(found.username, "member1");
    Ok(())
}

#[test]
fn test_start_fluent_query() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    let found = fixture
        .store
        .query_factory()
        .select_from_member()
        .where_clause([member::username().eq("member1")])
        .fetch_one()?;

    assert_eq!(found.username, "member1");
    assert_eq!(found.age, 10);
    assert_eq!(found.team, Some(fixture.team_a));
    Ok(())
}

#[test]
fn test_search_and_chain() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;
    let store = &fixture.store;

    let by_list = store
        .select_from_member()
        .where_clause([member::username().eq("member1"), member::age().eq(10)])
        .fetch_one()?;
    let by_chain = store
        .select_from_member()
        .where_clause([member::username().eq("member1").and(member::age().eq(10))])
        .fetch_one()?;

    assert_eq!(by_list, by_chain);
    assert_eq!(by_list.username, "member1");
    Ok(())
}

#[test]
fn test_search_operators() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;
    let store = &fixture.store;
    let count = |p: Predicate| store.select_from_member().where_clause([p]).fetch_count();

    assert_eq!(count(member::username().ne("member1")), 3);
    assert_eq!(count(member::username().eq("member1").not()), 3);
    assert_eq!(count(member::username().is_not_null()), 4);
    assert_eq!(count(member::age().is_in([10, 20])), 2);
    assert_eq!(count(member::age().not_in([10, 20])), 2);
    assert_eq!(count(member::age().between(10, 30)), 3);
    assert_eq!(count(member::age().goe(30)), 2);
    assert_eq!(count(member::age().gt(30)), 1);
    assert_eq!(count(member::age().loe(30)), 3);
    assert_eq!(count(member::age().lt(30)), 2);
    assert_eq!(count(member::username().like("member%")), 4);
    assert_eq!(count(member::username().contains("member")), 4);
    assert_eq!(count(member::username().starts_with("member")), 4);
    assert_eq!(count(member::team().eq(fixture.team_b)), 2);
    Ok(())
}

#[test]
fn test_result_fetch_modes() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;
    let query = fixture.store.select_from_member();

    let member_list = query.fetch();
    assert_eq!(
        usernames(&member_list),
        vec!["member1", "member2", "member3", "member4"]
    );

    assert_eq!(
        query.fetch_one(),
        Err(QueryError::NonUniqueResult { count: 4 })
    );

    let first_member = query.fetch_first()?;
    assert_eq!(first_member, member_list[0]);

    let page_list = query.fetch_results();
    assert_eq!(page_list.results, member_list);
    assert_eq!(page_list.total, 4);

    assert_eq!(query.fetch_count(), 4);
    Ok(())
}

#[test]
fn test_fetch_first_not_found() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    let result = fixture
        .store
        .select_from_member()
        .where_clause([member::username().eq("nonexistent")])
        .fetch_first();

    assert_eq!(result, Err(QueryError::NoResult));
    Ok(())
}

#[test]
fn test_paged_results_report_total() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    let page = fixture
        .store
        .select_from_member()
        .order_by([member::username().desc()])
        .offset(1)
        .limit(2)
        .fetch_results();

    assert_eq!(usernames(&page.results), vec!["member3", "member2"]);
    assert_eq!(page.total, 4);
    assert!(page.has_more());
    Ok(())
}

#[test]
fn test_scenarios_are_isolated() -> anyhow::Result<()> {
    let mut fixture = Fixture::new()?;
    fixture.store.insert_member("member5", 50, fixture.team_b)?;
    assert_eq!(fixture.store.select_from_member().fetch_count(), 5);

    let fresh = Fixture::new()?;
    assert_eq!(fresh.store.select_from_member().fetch_count(), 4);

    fixture.store.clear();
    assert_eq!(fixture.store.select_from_member().fetch_count(), 0);
    Ok(())
}
