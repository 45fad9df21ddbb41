use serverxml::{build, Element, ErrorKind, Kind, Result};

#[test]
fn test_build_server() -> Result<()> {
    let server = build(include_str!("fixtures/valid/server.xml"))?;

    assert_eq!(server.kind(), Kind::Server);
    assert_eq!(server.description(), Some("server1"));
    assert_eq!(server.children().len(), 2);
    assert_eq!(
        server
            .find(Kind::FeatureManager)
            .map(Element::list_features),
        Some(vec!["jsp-2.2"])
    );
    Ok(())
}

#[test]
fn test_build_feature_manager() -> Result<()> {
    let manager = build(include_str!("fixtures/valid/feature_manager.xml"))?;
    assert_eq!(manager.list_features(), vec!["servlet-3.0", "jsp-2.2"]);
    Ok(())
}

#[test]
fn test_build_http_endpoint() -> Result<()> {
    let endpoint = build(include_str!("fixtures/valid/http_endpoint.xml"))?;

    assert_eq!(endpoint.id(), Some("defaultHttpEndpoint"));
    assert_eq!(endpoint.host(), Some("*"));
    assert_eq!(endpoint.http_port(), Some("9080"));
    assert_eq!(endpoint.https_port(), Some("9443"));
    Ok(())
}

#[test]
fn test_build_basic_registry() -> Result<()> {
    let registry = build(include_str!("fixtures/valid/basic_registry.xml"))?;

    assert_eq!(registry.id(), Some("basic"));
    assert_eq!(registry.realm(), Some("customRealm"));
    assert_eq!(registry.children().len(), 4);

    let users = registry.find_all(Kind::User);
    let credentials: Vec<(Option<&str>, Option<&str>)> = users
        .iter()
        .map(|user| (user.name(), user.password()))
        .collect();
    assert_eq!(
        credentials,
        vec![
            (Some("resAdmin"), Some("resAdmin_pwd")),
            (Some("resDeploy"), Some("resDeploy_pwd")),
        ]
    );

    let groups = registry.find_all(Kind::Group);
    let members: Vec<(Option<&str>, Vec<&str>)> = groups
        .iter()
        .map(|group| (group.name(), group.list_members()))
        .collect();
    assert_eq!(
        members,
        vec![
            (Some("resAdministrators"), vec!["resAdmin"]),
            (Some("resDeployers"), vec!["resAdmin", "resDeploy"]),
        ]
    );
    Ok(())
}

#[test]
fn test_build_jdbc_driver() -> Result<()> {
    let driver = build(include_str!("fixtures/valid/jdbc_driver.xml"))?;

    assert_eq!(driver.id(), Some("db2-driver"));
    assert_eq!(driver.library_ref(), Some("db2Lib"));

    let library = driver.require(Kind::Library)?;
    assert_eq!(library.id(), Some("db2Lib"));
    assert_eq!(library.children().len(), 1);

    let fileset = library.require(Kind::Fileset)?;
    assert_eq!(fileset.dir(), Some("lib"));
    assert_eq!(fileset.includes(), Some("*.jar"));
    Ok(())
}

#[test]
fn test_build_db2_datasource() -> Result<()> {
    let datasource = build(include_str!("fixtures/valid/db2_datasource.xml"))?;

    assert_eq!(datasource.id(), Some("jdbc/ilogDataSource"));
    assert_eq!(
        datasource.isolation_level(),
        Some("TRANSACTION_READ_COMMITTED")
    );
    assert_eq!(datasource.jndi_name(), Some("jdbc/ilogDataSource"));
    assert_eq!(datasource.jdbc_driver_ref(), Some("db2-driver"));

    let props = datasource.require(Kind::Db2JccProperties)?;
    assert_eq!(props.database_name(), Some("odmdb"));
    assert_eq!(props.db_user(), Some("ilog"));
    assert_eq!(props.db_password(), Some("passw0rd"));
    assert_eq!(props.server_name(), Some("localhost"));
    assert_eq!(props.port_number(), Some("50000"));
    assert_eq!(props.current_schema(), Some("odm"));
    Ok(())
}

#[test]
fn test_build_oracle_datasource() -> Result<()> {
    let datasource = build(include_str!("fixtures/valid/oracle_datasource.xml"))?;

    assert_eq!(datasource.id(), Some("jdbc/resdatasource"));
    assert_eq!(datasource.isolation_level(), None);
    assert_eq!(datasource.jndi_name(), Some("jdbc/resdatasource"));
    assert_eq!(datasource.jdbc_driver_ref(), Some("oracle-driver"));

    let props = datasource.require(Kind::OracleProperties)?;
    assert_eq!(props.database_name(), Some("odmdb"));
    assert_eq!(props.port_number(), Some("1521"));
    assert_eq!(props.current_schema(), None);
    Ok(())
}

#[test]
fn test_find_does_not_match_property_family() -> Result<()> {
    let datasource = build(include_str!("fixtures/valid/oracle_datasource.xml"))?;

    assert!(datasource.find(Kind::DataSourceProperties).is_none());
    assert!(datasource.find(Kind::Db2JccProperties).is_none());
    assert_eq!(
        datasource.find_properties().map(Element::kind),
        Some(Kind::OracleProperties)
    );
    Ok(())
}

#[test]
fn test_build_application() -> Result<()> {
    let app = build(include_str!("fixtures/valid/application.xml"))?;

    assert_eq!(app.id(), Some("testing"));
    assert_eq!(app.name(), Some("testing"));
    assert_eq!(app.app_type(), Some("war"));
    assert_eq!(app.location(), Some("${server.config.dir}/apps/testing.war"));
    assert_eq!(app.children().len(), 1);

    let binding = app.require(Kind::ApplicationBnd)?;
    let roles = binding.find_all(Kind::SecurityRole);
    assert_eq!(roles.len(), 2);
    for role in roles {
        assert_eq!(role.children().len(), 1);
        let group = role.require(Kind::Group)?;
        assert_eq!(group.name(), role.name());
    }
    Ok(())
}

#[test]
fn test_build_key_store() -> Result<()> {
    let key_store = build(include_str!("fixtures/valid/key_store.xml"))?;
    assert_eq!(key_store.id(), Some("defaultKeyStore"));
    assert_eq!(key_store.password(), Some("tester"));
    Ok(())
}

#[test]
fn test_build_managed_executor_service() -> Result<()> {
    let service = build(include_str!("fixtures/valid/managed_executor_service.xml"))?;
    assert_eq!(service.jndi_name(), Some("concurrent/drExecutorService"));
    Ok(())
}

#[test]
fn test_build_ssl() -> Result<()> {
    let ssl = build(include_str!("fixtures/valid/ssl.xml"))?;
    assert_eq!(ssl.id(), Some("defaultSSLConfig"));
    assert_eq!(ssl.key_store_ref(), Some("defaultKeyStore"));
    assert_eq!(ssl.ssl_protocol(), Some("TLS"));
    Ok(())
}

#[test]
fn test_unknown_attributes_are_preserved() -> Result<()> {
    let endpoint = build(r#"<httpEndpoint id="e" onError="FAIL" httpPort="80"/>"#)?;
    assert_eq!(endpoint.get("onError"), Some("FAIL"));
    let keys: Vec<&str> = endpoint.attributes().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["id", "onError", "httpPort"]);
    Ok(())
}

#[test]
fn test_unknown_child_fails_whole_build() {
    let result = build(include_str!("fixtures/invalid/unknown_child.xml"));
    match result {
        Err(err) => assert_eq!(
            err.kind(),
            &ErrorKind::UnknownElement {
                tag: "webContainer".to_string()
            }
        ),
        Ok(root) => panic!("expected UnknownElement, built <{}>", root.tag()),
    }
}

#[test]
fn test_unknown_root_fails() {
    let result = build(include_str!("fixtures/invalid/unknown_root.xml"));
    assert_eq!(
        result.map_err(|err| err.kind().clone()),
        Err(ErrorKind::UnknownElement {
            tag: "client".to_string()
        })
    );
}

#[test]
fn test_tags_are_case_sensitive() {
    assert!(build("<Server/>").is_err());
    assert!(build("<featuremanager/>").is_err());
}

#[test]
fn test_unknown_element_reports_position() {
    let err = match build(include_str!("fixtures/invalid/unknown_child.xml")) {
        Err(err) => err,
        Ok(root) => panic!("expected UnknownElement, built <{}>", root.tag()),
    };
    assert_eq!((err.span().start.line, err.span().start.col), (2, 5));
    assert_eq!(err.to_string(), "error at 2:5: unknown element: <webContainer>");
}

#[test]
fn test_whitespace_only_text_is_kept() -> Result<()> {
    let feature = build("<feature> </feature>")?;
    assert_eq!(feature.value(), Some(" "));
    assert_eq!(serverxml::render(&feature), "<feature> </feature>");
    Ok(())
}

#[test]
fn test_comment_inside_text_does_not_split_value() -> Result<()> {
    let feature = build("<feature>jsp<!-- x -->-2.2</feature>")?;
    assert_eq!(feature.value(), Some("jsp-2.2"));

    let manager = build("<featureManager><feature>jsp<!-- x -->-2.2</feature></featureManager>")?;
    assert_eq!(manager.list_features(), vec!["jsp-2.2"]);
    Ok(())
}

#[test]
fn test_text_after_first_child_is_not_the_value() -> Result<()> {
    let group = build(r#"<group>lead<member name="a"/>tail</group>"#)?;
    assert_eq!(group.value(), Some("lead"));
    assert_eq!(group.list_members(), vec!["a"]);

    let group = build(r#"<group><member name="a"/>tail</group>"#)?;
    assert_eq!(group.value(), None);
    Ok(())
}

#[test]
fn test_text_entities_are_decoded() -> Result<()> {
    let feature = build("<feature>a&amp;b&#42;&#x41;&lt;</feature>")?;
    assert_eq!(feature.value(), Some("a&b*A<"));
    Ok(())
}
