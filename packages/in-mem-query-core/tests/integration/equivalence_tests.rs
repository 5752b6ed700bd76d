//! String queries and fluent queries return the same members.

use in_mem_query_core::{member, Member, Predicate};

use super::helpers::Fixture;

fn assert_equivalent(
    fixture: &Fixture,
    ql: &str,
    params: &[(&str, i64)],
    predicates: Vec<Predicate>,
) -> anyhow::Result<()> {
    let mut query = fixture.store.query_factory().create_query(ql)?;
    for (name, value) in params {
        query = query.set_parameter(name, *value)?;
    }
    let via_string: Vec<&Member> = query.get_result_list()?;

    let via_fluent = fixture
        .store
        .select_from_member()
        .where_clause(predicates)
        .fetch();

    assert_eq!(via_string, via_fluent, "query: {}", ql);
    Ok(())
}

#[test]
fn test_equivalent_queries() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    assert_equivalent(
        &fixture,
        "select m from Member m where m.username = 'member1' and m.age = :age",
        &[("age", 10)],
        vec![member::username().eq("member1"), member::age().eq(10)],
    )?;
    assert_equivalent(
        &fixture,
        "select m from Member m where m.age between :lo and :hi",
        &[("lo", 15), ("hi", 35)],
        vec![member::age().between(15, 35)],
    )?;
    assert_equivalent(
        &fixture,
        "select m from Member m where m.username like 'member%' and m.age <> 20",
        &[],
        vec![member::username().like("member%"), member::age().ne(20)],
    )?;
    assert_equivalent(
        &fixture,
        "select m from Member m where m.age not in (10, 40)",
        &[],
        vec![member::age().not_in([10, 40])],
    )?;
    assert_equivalent(
        &fixture,
        "select m from Member m where m.team.id = :team",
        &[("team", fixture.team_b.0 as i64)],
        vec![member::team().eq(fixture.team_b)],
    )?;
    assert_equivalent(&fixture, "select m from Member m", &[], Vec::new())?;
    Ok(())
}

#[test]
fn test_equivalent_ordering() -> anyhow::Result<()> {
    let fixture = Fixture::new()?;

    let via_string = fixture
        .store
        .query_factory()
        .create_query("select m from Member m order by m.team desc, m.age desc")?
        .get_result_list()?;
    let via_fluent = fixture
        .store
        .select_from_member()
        .order_by([member::team().desc(), member::age().desc()])
        .fetch();

    assert_eq!(via_string, via_fluent);
    assert_eq!(via_fluent[0].username, "member4");
    Ok(())
}
