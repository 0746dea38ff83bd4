use crate::error::Result;
use semver::Version;
use serde::Serialize;

/// Everything needed to describe one release of a library as a vcpkg port
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortSpec {
    pub name: String,
    /// GitHub `owner/repo`
    pub repo: String,
    pub version: Version,
    /// Git ref the port builds from, usually `v<version>`.
    pub tag: String,
    /// `"0"` until a probe build reports the real hash.
    pub sha512: String,
    pub description: String,
    pub homepage: String,
    pub license: String,
    pub supports: String,
    pub dependencies: Vec<String>,
}

impl PortSpec {
    /// The D++ port at `version`, with a placeholder hash.
    #[must_use]
    pub fn dpp(version: Version) -> Self {
        Self {
            name: "dpp".to_string(),
            repo: "brainboxdotcc/DPP".to_string(),
            tag: format!("v{version}"),
            version,
            sha512: "0".to_string(),
            description: "D++ Extremely Lightweight C++ Discord Library.".to_string(),
            homepage: "https://dpp.dev/".to_string(),
            license: "Apache-2.0".to_string(),
            supports: "((windows & !static & !uwp) | linux | osx)".to_string(),
            dependencies: ["libsodium", "nlohmann-json", "openssl", "opus", "zlib"]
                .map(String::from)
                .to_vec(),
        }
    }

    #[must_use]
    pub fn with_sha512(mut self, sha512: impl Into<String>) -> Self {
        self.sha512 = sha512.into();
        self
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Dependency<'a> {
    Plain(&'a str),
    Host { name: &'a str, host: bool },
}

#[derive(Serialize)]
struct Manifest<'a> {
    name: &'a str,
    version: String,
    description: &'a str,
    homepage: &'a str,
    license: &'a str,
    supports: &'a str,
    dependencies: Vec<Dependency<'a>>,
}

/// Renders `vcpkg.json` for the port.
///
/// # Errors
/// Returns error if serialization fails
pub fn render_manifest(spec: &PortSpec) -> Result<String> {
    let dependencies = spec
        .dependencies
        .iter()
        .map(|name| Dependency::Plain(name))
        .chain(
            ["vcpkg-cmake", "vcpkg-cmake-config"]
                .into_iter()
                .map(|name| Dependency::Host { name, host: true }),
        )
        .collect();

    let manifest = Manifest {
        name: &spec.name,
        version: spec.version.to_string(),
        description: &spec.description,
        homepage: &spec.homepage,
        license: &spec.license,
        supports: &spec.supports,
        dependencies,
    };

    let mut json = serde_json::to_string_pretty(&manifest)?;
    json.push('\n');
    Ok(json)
}
