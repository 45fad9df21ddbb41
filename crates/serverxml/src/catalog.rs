//! Closed catalog of configuration element kinds
//!
//! Every tag the document model recognizes has exactly one [`Kind`]. Typed
//! attribute accessors and the dedup-aware structural helpers live here as
//! `impl Element` blocks; they are thin wrappers over [`Element::get`],
//! [`Element::set`] and [`Element::add`].
//!
//! Accessors exist on every kind and read or write whatever key they name;
//! callers check [`Element::kind`] when it matters. The structural helpers
//! expect one owning kind each and assert it in debug builds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Configuration element kind
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    Server,
    FeatureManager,
    Feature,
    HttpEndpoint,
    BasicRegistry,
    User,
    Group,
    Member,
    Library,
    Fileset,
    JdbcDriver,
    DataSource,
    /// Vendor-neutral datasource property block
    DataSourceProperties,
    /// DB2 JCC property block: the shared property set plus `currentSchema`
    Db2JccProperties,
    /// Oracle property block: the shared property set only
    OracleProperties,
    Application,
    ApplicationBnd,
    SecurityRole,
    Ssl,
    KeyStore,
    ManagedExecutorService,
}

impl Kind {
    /// Every kind, in registration order
    pub const ALL: [Self; 21] = [
        Self::Server,
        Self::FeatureManager,
        Self::Feature,
        Self::HttpEndpoint,
        Self::BasicRegistry,
        Self::User,
        Self::Group,
        Self::Member,
        Self::Library,
        Self::Fileset,
        Self::JdbcDriver,
        Self::DataSource,
        Self::DataSourceProperties,
        Self::Db2JccProperties,
        Self::OracleProperties,
        Self::Application,
        Self::ApplicationBnd,
        Self::SecurityRole,
        Self::Ssl,
        Self::KeyStore,
        Self::ManagedExecutorService,
    ];

    /// Markup tag name
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::FeatureManager => "featureManager",
            Self::Feature => "feature",
            Self::HttpEndpoint => "httpEndpoint",
            Self::BasicRegistry => "basicRegistry",
            Self::User => "user",
            Self::Group => "group",
            Self::Member => "member",
            Self::Library => "library",
            Self::Fileset => "fileset",
            Self::JdbcDriver => "jdbcDriver",
            Self::DataSource => "dataSource",
            Self::DataSourceProperties => "properties",
            Self::Db2JccProperties => "properties.db2.jcc",
            Self::OracleProperties => "properties.oracle",
            Self::Application => "application",
            Self::ApplicationBnd => "application-bnd",
            Self::SecurityRole => "security-role",
            Self::Ssl => "ssl",
            Self::KeyStore => "keyStore",
            Self::ManagedExecutorService => "managedExecutorService",
        }
    }

    /// Fresh, empty element of this kind
    pub fn instantiate(self) -> Element {
        Element::new(self)
    }

    /// True for the three datasource property block kinds
    pub const fn is_datasource_properties(self) -> bool {
        matches!(
            self,
            Self::DataSourceProperties | Self::Db2JccProperties | Self::OracleProperties
        )
    }
}

/// Attribute keys used by the typed accessors
pub mod keys {
    pub const ID: &str = "id";
    pub const DESCRIPTION: &str = "description";
    pub const HOST: &str = "host";
    pub const HTTP_PORT: &str = "httpPort";
    pub const HTTPS_PORT: &str = "httpsPort";
    pub const REALM: &str = "realm";
    pub const NAME: &str = "name";
    pub const PASSWORD: &str = "password";
    pub const DIR: &str = "dir";
    pub const INCLUDES: &str = "includes";
    pub const LIBRARY_REF: &str = "libraryRef";
    pub const JNDI_NAME: &str = "jndiName";
    pub const JDBC_DRIVER_REF: &str = "jdbcDriverRef";
    pub const ISOLATION_LEVEL: &str = "isolationLevel";
    pub const DATABASE_NAME: &str = "databaseName";
    pub const SERVER_NAME: &str = "serverName";
    pub const PORT_NUMBER: &str = "portNumber";
    pub const USER: &str = "user";
    pub const CURRENT_SCHEMA: &str = "currentSchema";
    pub const TYPE: &str = "type";
    pub const LOCATION: &str = "location";
    pub const KEY_STORE_REF: &str = "keyStoreRef";
    pub const SSL_PROTOCOL: &str = "sslProtocol";
}

macro_rules! attribute_accessors {
    ($($(#[$meta:meta])* $get:ident, $set:ident => $key:path;)*) => {
        impl Element {
            $(
                $(#[$meta])*
                pub fn $get(&self) -> Option<&str> {
                    self.get($key)
                }

                pub fn $set(&mut self, value: impl Into<String>) {
                    self.set($key, value);
                }
            )*
        }
    };
}

attribute_accessors! {
    /// `id`, common to every kind
    id, set_id => keys::ID;
    /// `<server description>`
    description, set_description => keys::DESCRIPTION;
    /// `<httpEndpoint host>`
    host, set_host => keys::HOST;
    /// `<httpEndpoint httpPort>`, kept as text
    http_port, set_http_port => keys::HTTP_PORT;
    /// `<httpEndpoint httpsPort>`, kept as text
    https_port, set_https_port => keys::HTTPS_PORT;
    /// `<basicRegistry realm>`
    realm, set_realm => keys::REALM;
    /// `name` of a user, group, member, application or security role
    name, set_name => keys::NAME;
    /// `password` of a user or key store
    password, set_password => keys::PASSWORD;
    /// `<fileset dir>`
    dir, set_dir => keys::DIR;
    /// `<fileset includes>`
    includes, set_includes => keys::INCLUDES;
    /// `<jdbcDriver libraryRef>`
    library_ref, set_library_ref => keys::LIBRARY_REF;
    /// `jndiName` of a datasource or managed executor service
    jndi_name, set_jndi_name => keys::JNDI_NAME;
    /// `<dataSource jdbcDriverRef>`
    jdbc_driver_ref, set_jdbc_driver_ref => keys::JDBC_DRIVER_REF;
    /// `<dataSource isolationLevel>`
    isolation_level, set_isolation_level => keys::ISOLATION_LEVEL;
    database_name, set_database_name => keys::DATABASE_NAME;
    server_name, set_server_name => keys::SERVER_NAME;
    port_number, set_port_number => keys::PORT_NUMBER;
    /// Database user of a datasource property block
    db_user, set_db_user => keys::USER;
    /// Database password of a datasource property block
    db_password, set_db_password => keys::PASSWORD;
    /// `<properties.db2.jcc currentSchema>`
    current_schema, set_current_schema => keys::CURRENT_SCHEMA;
    /// `<application type>`, e.g. `war`
    app_type, set_app_type => keys::TYPE;
    location, set_location => keys::LOCATION;
    /// `<ssl keyStoreRef>`
    key_store_ref, set_key_store_ref => keys::KEY_STORE_REF;
    ssl_protocol, set_ssl_protocol => keys::SSL_PROTOCOL;
}

/// Structural helpers. Duplicate-insertion policy is defined here and only here.
impl Element {
    fn expect_kind(&self, kind: Kind, helper: &str) {
        debug_assert!(
            self.kind() == kind,
            "{helper} called on <{}>, expected <{}>",
            self.tag(),
            kind.tag()
        );
    }

    /// `<feature>` element carrying `name` as its text
    pub fn feature(name: impl Into<String>) -> Self {
        let mut feature = Self::new(Kind::Feature);
        feature.set_value(name);
        feature
    }

    /// `<member name=..>` element
    pub fn member(name: impl Into<String>) -> Self {
        let mut member = Self::new(Kind::Member);
        member.set_name(name);
        member
    }

    /// Feature names of a `<featureManager>`, in document order
    pub fn list_features(&self) -> Vec<&str> {
        self.expect_kind(Kind::FeatureManager, "list_features");
        self.children()
            .iter()
            .filter(|child| child.kind() == Kind::Feature)
            .filter_map(Self::value)
            .collect()
    }

    /// Append each feature not already listed, keeping first-seen order
    pub fn add_features<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.expect_kind(Kind::FeatureManager, "add_features");
        for name in names {
            let name = name.as_ref();
            if !self.list_features().contains(&name) {
                self.add(Self::feature(name));
            }
        }
    }

    /// Member names of a `<group>`, in document order
    pub fn list_members(&self) -> Vec<&str> {
        self.expect_kind(Kind::Group, "list_members");
        self.children()
            .iter()
            .filter(|child| child.kind() == Kind::Member)
            .filter_map(Self::name)
            .collect()
    }

    /// Append each member not already in the group, keeping first-seen order
    pub fn add_members<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.expect_kind(Kind::Group, "add_members");
        for name in names {
            let name = name.as_ref();
            if !self.list_members().contains(&name) {
                self.add(Self::member(name));
            }
        }
    }

    /// Attach `role` under the application's single `<application-bnd>`,
    /// creating the binding on first use.
    pub fn add_security_role(&mut self, role: Self) {
        self.expect_kind(Kind::Application, "add_security_role");
        if self.find(Kind::ApplicationBnd).is_none() {
            self.add(Self::new(Kind::ApplicationBnd));
        }
        if let Some(binding) = self.find_mut(Kind::ApplicationBnd) {
            binding.add(role);
        }
    }

    /// Map groups onto a `<security-role>`. No dedup.
    pub fn add_groups<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expect_kind(Kind::SecurityRole, "add_groups");
        for name in names {
            self.add(Self::new(Kind::Group)).set_name(name);
        }
    }

    /// Map users onto a `<security-role>`. No dedup.
    pub fn add_users<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expect_kind(Kind::SecurityRole, "add_users");
        for name in names {
            self.add(Self::new(Kind::User)).set_name(name);
        }
    }

    /// First datasource property block of any vendor kind.
    ///
    /// [`Element::find`] matches one exact kind; this matches the whole family.
    pub fn find_properties(&self) -> Option<&Self> {
        self.expect_kind(Kind::DataSource, "find_properties");
        self.children()
            .iter()
            .find(|child| child.kind().is_datasource_properties())
    }

    pub fn find_properties_mut(&mut self) -> Option<&mut Self> {
        self.expect_kind(Kind::DataSource, "find_properties_mut");
        self.children_mut()
            .iter_mut()
            .find(|child| child.kind().is_datasource_properties())
    }
}
