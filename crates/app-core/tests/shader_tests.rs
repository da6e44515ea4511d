// Parse and validate the shipped WGSL with naga, and check the uniform
// block agrees with the Rust-side layout.

use backdrop_core::{SceneUniforms, LINES_WGSL, PARTICLES_WGSL};

fn validate_wgsl(code: &str) -> Result<naga::Module, String> {
    let module =
        naga::front::wgsl::parse_str(code).map_err(|e| format!("WGSL parse error: {:?}", e))?;
    let mut validator = naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::all(),
    );
    validator
        .validate(&module)
        .map_err(|e| format!("WGSL validation error: {:?}", e))?;
    Ok(module)
}

fn scene_struct_size(module: &naga::Module) -> u32 {
    module
        .types
        .iter()
        .find(|(_, ty)| ty.name.as_deref() == Some("Scene"))
        .map(|(_, ty)| ty.inner.size(module.to_ctx()))
        .expect("Scene struct")
}

#[test]
fn particle_shader_validates() {
    let module = validate_wgsl(PARTICLES_WGSL).unwrap();
    let entries: Vec<&str> = module.entry_points.iter().map(|e| e.name.as_str()).collect();
    assert!(entries.contains(&"vs_main"));
    assert!(entries.contains(&"fs_main"));
}

#[test]
fn line_shader_validates() {
    let module = validate_wgsl(LINES_WGSL).unwrap();
    assert_eq!(module.entry_points.len(), 2);
}

#[test]
fn scene_uniform_layout_matches() {
    let rust = std::mem::size_of::<SceneUniforms>() as u32;
    for src in [PARTICLES_WGSL, LINES_WGSL] {
        let module = validate_wgsl(src).unwrap();
        assert_eq!(scene_struct_size(&module), rust);
    }
}
