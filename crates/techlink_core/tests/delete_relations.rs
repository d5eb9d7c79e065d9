use rusqlite::Connection;
use techlink_core::db::open_db_in_memory;
use techlink_core::{
    BusinessError, CapabilityTechnologyService, SqliteCapabilityTechnologyRepository,
    SqliteTechnologyRepository, TechnologyDraft, TechnologyId, TechnologyService,
};

#[test]
fn delete_batch_spanning_two_capabilities_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let (technologies, capabilities) = services(&conn);
    let ids = create_technologies(&conn, 6, "tech");

    capabilities.associate(100, &ids[..3]).unwrap();
    capabilities.associate(200, &ids[3..6]).unwrap();

    let err = technologies
        .delete_technologies(&[ids[0], ids[3]])
        .unwrap_err();
    assert!(matches!(err, BusinessError::MultipleCapabilitiesRelated));

    // Nothing was removed.
    assert_eq!(
        technologies
            .get_technologies_by_ids(&[ids[0], ids[3]])
            .unwrap()
            .len(),
        2
    );
    assert_eq!(capabilities.find_by_capability(100).unwrap().len(), 3);
}

#[test]
fn delete_batch_of_one_capability_removes_links_and_rows() {
    let conn = open_db_in_memory().unwrap();
    let (technologies, capabilities) = services(&conn);
    let ids = create_technologies(&conn, 3, "tech");

    capabilities.associate(100, &ids).unwrap();
    technologies.delete_technologies(&ids).unwrap();

    let err = capabilities.find_by_capability(100).unwrap_err();
    assert!(matches!(err, BusinessError::CapabilityNotFound));

    let err = technologies.get_technologies_by_ids(&ids).unwrap_err();
    assert!(matches!(err, BusinessError::TechnologyNotFound));
}

#[test]
fn delete_subset_of_one_capability_is_permitted() {
    let conn = open_db_in_memory().unwrap();
    let (technologies, capabilities) = services(&conn);
    let ids = create_technologies(&conn, 3, "tech");

    capabilities.associate(100, &ids).unwrap();
    technologies.delete_technologies(&[ids[0]]).unwrap();

    let remaining = capabilities.find_by_capability(100).unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|technology| technology.id != ids[0]));
}

#[test]
fn delete_batch_with_no_capability_is_permitted() {
    let conn = open_db_in_memory().unwrap();
    let (technologies, _) = services(&conn);
    let ids = create_technologies(&conn, 2, "tech");

    technologies.delete_technologies(&ids).unwrap();

    let err = technologies.get_technologies_by_ids(&ids).unwrap_err();
    assert!(matches!(err, BusinessError::TechnologyNotFound));
}

type Technologies<'conn> = TechnologyService<
    SqliteTechnologyRepository<'conn>,
    SqliteCapabilityTechnologyRepository<'conn>,
>;
type Capabilities<'conn> = CapabilityTechnologyService<
    SqliteTechnologyRepository<'conn>,
    SqliteCapabilityTechnologyRepository<'conn>,
>;

fn services(conn: &Connection) -> (Technologies<'_>, Capabilities<'_>) {
    (
        TechnologyService::new(
            SqliteTechnologyRepository::new(conn),
            SqliteCapabilityTechnologyRepository::new(conn),
        ),
        CapabilityTechnologyService::new(
            SqliteTechnologyRepository::new(conn),
            SqliteCapabilityTechnologyRepository::new(conn),
        ),
    )
}

fn create_technologies(conn: &Connection, count: usize, prefix: &str) -> Vec<TechnologyId> {
    let service = TechnologyService::new(
        SqliteTechnologyRepository::new(conn),
        SqliteCapabilityTechnologyRepository::new(conn),
    );
    let drafts: Vec<TechnologyDraft> = (0..count)
        .map(|index| TechnologyDraft::new(format!("{prefix}-{index}"), format!("entry {index}")))
        .collect();
    service
        .create_technologies(&drafts)
        .unwrap()
        .into_iter()
        .map(|technology| technology.id)
        .collect()
}
