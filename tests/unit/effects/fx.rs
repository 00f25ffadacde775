use super::*;

fn inst(kind: &str, params: serde_json::Value) -> EffectInstance {
    EffectInstance {
        kind: kind.to_string(),
        params,
    }
}

#[test]
fn parse_opacity_mul() {
    let e = parse_effect(&inst("opacity_mul", serde_json::json!({ "value": 0.5 }))).unwrap();
    assert_eq!(e, Effect::OpacityMul { value: 0.5 });
}

#[test]
fn parse_blur_defaults_sigma_to_half_radius() {
    let e = parse_effect(&inst("blur", serde_json::json!({ "radius_px": 8 }))).unwrap();
    assert_eq!(
        e,
        Effect::Blur {
            radius_px: 8,
            sigma: 4.0
        }
    );
}

#[test]
fn parse_inner_shadow_with_defaults() {
    let e = parse_effect(&inst("inner_shadow", serde_json::json!({ "radius_px": 5 }))).unwrap();
    assert_eq!(
        e,
        Effect::InnerShadow {
            radius_px: 5,
            sigma: 2.5,
            opacity: 0.5,
            dx: 0,
            dy: 0,
        }
    );
}

#[test]
fn parse_inner_shadow_clamps_opacity() {
    let e = parse_effect(&inst(
        "inner-shadow",
        serde_json::json!({ "radius_px": 3, "opacity": 2.0, "dx": 2, "dy": -1 }),
    ))
    .unwrap();
    assert_eq!(
        e,
        Effect::InnerShadow {
            radius_px: 3,
            sigma: 1.5,
            opacity: 1.0,
            dx: 2,
            dy: -1,
        }
    );
}

#[test]
fn unknown_kinds_and_bad_params_are_rejected() {
    assert!(parse_effect(&inst("bloom", serde_json::Value::Null)).is_err());
    assert!(parse_effect(&inst("", serde_json::Value::Null)).is_err());
    assert!(parse_effect(&inst("blur", serde_json::json!({}))).is_err());
    assert!(parse_effect(&inst("blur", serde_json::json!({ "radius_px": 500 }))).is_err());
    assert!(
        parse_effect(&inst(
            "blur",
            serde_json::json!({ "radius_px": 4, "sigma": 0.0 })
        ))
        .is_err()
    );
}

#[test]
fn normalize_folds_opacity_and_drops_noops() {
    let fx = [
        Effect::OpacityMul { value: 0.5 },
        Effect::OpacityMul { value: 0.25 },
        Effect::Blur {
            radius_px: 0,
            sigma: 1.0,
        },
        Effect::InnerShadow {
            radius_px: 4,
            sigma: 2.0,
            opacity: 0.0,
            dx: 0,
            dy: 0,
        },
    ];
    let p = normalize_effects(&fx);
    assert_eq!(p.inline.opacity_mul, 0.125);
    assert!(p.passes.is_empty());
}

#[test]
fn normalize_keeps_real_passes_in_order() {
    let fx = [
        Effect::Blur {
            radius_px: 2,
            sigma: 1.0,
        },
        Effect::InnerShadow {
            radius_px: 4,
            sigma: 2.0,
            opacity: 0.8,
            dx: 1,
            dy: 1,
        },
    ];
    let p = normalize_effects(&fx);
    assert_eq!(p.passes.len(), 2);
    assert!(matches!(p.passes[0], PassFx::Blur { radius_px: 2, .. }));
    assert!(matches!(p.passes[1], PassFx::InnerShadow { .. }));
}

#[test]
fn shorthand_constructors_parse_back() {
    assert!(parse_effect(&blur(3)).is_ok());
    assert!(parse_effect(&inner_shadow(5, 0.8, 2, 2)).is_ok());
}
