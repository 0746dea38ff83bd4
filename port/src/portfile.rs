use crate::manifest::PortSpec;

/// Renders `portfile.cmake` for the port.
#[must_use]
pub fn render_portfile(spec: &PortSpec) -> String {
    format!(
        r#"vcpkg_from_github(
    OUT_SOURCE_PATH SOURCE_PATH
    REPO {repo}
    REF "{tag}"
    SHA512 {sha512}
)

vcpkg_cmake_configure(
    SOURCE_PATH "${{SOURCE_PATH}}"
    DISABLE_PARALLEL_CONFIGURE
)

vcpkg_cmake_install()

vcpkg_cmake_config_fixup(NO_PREFIX_CORRECTION)

file(REMOVE_RECURSE "${{CURRENT_PACKAGES_DIR}}/debug/share/{name}")
file(REMOVE_RECURSE "${{CURRENT_PACKAGES_DIR}}/debug/include")

if(VCPKG_LIBRARY_LINKAGE STREQUAL "static")
    file(REMOVE_RECURSE "${{CURRENT_PACKAGES_DIR}}/bin" "${{CURRENT_PACKAGES_DIR}}/debug/bin")
endif()

file(
    INSTALL "${{SOURCE_PATH}}/LICENSE"
    DESTINATION "${{CURRENT_PACKAGES_DIR}}/share/${{PORT}}"
    RENAME copyright
)

file(COPY "${{CMAKE_CURRENT_LIST_DIR}}/usage" DESTINATION "${{CURRENT_PACKAGES_DIR}}/share/${{PORT}}")
"#,
        repo = spec.repo,
        tag = spec.tag,
        sha512 = spec.sha512,
        name = spec.name,
    )
}
