/// Lit, textured Phong shader used for every scene object.
///
/// Group 0 holds per-frame uniforms, group 1 the object's model and normal
/// matrices, group 2 its texture and sampler.
pub const PHONG_SHADER: &str = r#"
struct FrameUniforms {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
    view_position: vec4<f32>,
    // x: ambient strength, y: diffuse floor, z: specular intensity, w: shininess
    phong: vec4<f32>,
    uv_scale: vec4<f32>,
};

struct ObjectUniforms {
    model: mat4x4<f32>,
    normal: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var<uniform> object: ObjectUniforms;

@group(2) @binding(0)
var surface_texture: texture_2d<f32>;
@group(2) @binding(1)
var surface_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = object.model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = frame.projection * frame.view * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = (object.normal * vec4<f32>(vertex.normal, 0.0)).xyz;
    out.uv = vertex.uv;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_color = frame.light_color.rgb;
    let n = normalize(in.world_normal);
    let light_dir = normalize(frame.light_position.xyz - in.world_position);
    let view_dir = normalize(frame.view_position.xyz - in.world_position);

    let ambient = frame.phong.x * light_color;

    let impact = max(dot(n, light_dir), frame.phong.y);
    let diffuse = impact * light_color;

    let reflect_dir = reflect(-light_dir, n);
    let spec = pow(max(dot(view_dir, reflect_dir), 0.0), frame.phong.w);
    let specular = frame.phong.z * spec * light_color;

    let tex = textureSample(surface_texture, surface_sampler, in.uv * frame.uv_scale.xy);
    return vec4<f32>((ambient + diffuse + specular) * tex.rgb, 1.0);
}
"#;

/// Unlit solid white shader for the lamp marker.
pub const LAMP_SHADER: &str = r#"
struct FrameUniforms {
    view: mat4x4<f32>,
    projection: mat4x4<f32>,
    light_position: vec4<f32>,
    light_color: vec4<f32>,
    view_position: vec4<f32>,
    phong: vec4<f32>,
    uv_scale: vec4<f32>,
};

struct ObjectUniforms {
    model: mat4x4<f32>,
    normal: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: FrameUniforms;

@group(1) @binding(0)
var<uniform> object: ObjectUniforms;

@vertex
fn vs_lamp(@location(0) position: vec3<f32>) -> @builtin(position) vec4<f32> {
    return frame.projection * frame.view * object.model * vec4<f32>(position, 1.0);
}

@fragment
fn fs_lamp() -> @location(0) vec4<f32> {
    return vec4<f32>(1.0, 1.0, 1.0, 1.0);
}
"#;
