use spheres::{
    algebra::{point, vector, EPSILON},
    color::Color,
    intersection::{hit, prepare_computations},
    light::{lighting, PointLight},
    material::Material,
    ray::Ray,
    renderer::{render, Projection, Wall},
    scene::{self, View},
    sphere::Sphere,
    transform::{scaling, translation},
    world::World,
};

/// The classic single-sphere silhouette: fixed origin, wall at z = 10.
fn pink_sphere_world() -> World {
    let mut w = World::default();
    w.add_object(Sphere::new().with_material(Material::default().color(Color::new(1.0, 0.2, 1.0))));
    w.set_light(PointLight::new(point(-10.0, 10.0, -10.0), Color::white()));
    w
}

#[test]
fn wall_render_matches_manual_pipeline() {
    let world = pink_sphere_world();
    let wall = Wall::new(25, 25);
    let canvas = render(&wall, &world);

    let sphere = &world.objects()[0];
    let light = world.light().unwrap();
    for y in 0..25 {
        for x in 0..25 {
            let ray = wall.ray_for_pixel(x, y);
            let xs = sphere.intersect(&ray);
            let expected = match hit(&xs) {
                Some(h) => {
                    let p = ray.position(h.t);
                    let n = sphere.normal_at(p);
                    let shadowed = world.is_shadowed(p + n * EPSILON);
                    lighting(sphere.material(), sphere, light, p, -ray.direction, n, shadowed)
                }
                None => Color::black(),
            };
            assert_eq!(canvas.pixel_at(x, y), expected, "pixel ({x}, {y})");
        }
    }
}

#[test]
fn rendered_ppm_is_well_formed() {
    let canvas = render(&Wall::new(40, 30), &pink_sphere_world());
    let ppm = canvas.to_ppm();
    let mut lines = ppm.lines();
    assert_eq!(lines.next(), Some("P3"));
    assert_eq!(lines.next(), Some("40 30"));
    assert_eq!(lines.next(), Some("255"));

    let mut count = 0;
    for line in lines {
        assert!(line.len() <= 70, "line too long: {line}");
        for v in line.split(' ') {
            let v: u16 = v.parse().unwrap();
            assert!(v <= 255);
            count += 1;
        }
    }
    assert_eq!(count, 40 * 30 * 3);
    assert!(ppm.ends_with('\n'));
}

#[test]
fn scene_file_drives_a_full_render() {
    let scene = scene::from_str(
        r#"{
            "render": { "width": 11, "height": 11 },
            "camera": { "from": [0, 0, -5], "to": [0, 0, 0], "up": [0, 1, 0], "fov": 90 },
            "materials": { "pastel": { "rgb": [0.8, 1.0, 0.6], "diffuse": 0.7, "specular": 0.2 } },
            "objects": [
                { "sphere": { "name": "outer", "mat": "pastel" } },
                { "sphere": { "name": "inner", "transforms": [ { "scale": [0.5, 0.5, 0.5] } ] } }
            ],
            "light": { "pos": [-10, 10, -10], "intensity": [1, 1, 1] }
        }"#,
    )
    .unwrap();
    assert!(matches!(scene.view, View::Camera(_)));

    let canvas = render(&scene.view, &scene.world);
    assert_eq!(canvas.pixel_at(5, 5), Color::new(0.38066, 0.47583, 0.2855));
}

#[test]
fn bundled_scene_file_loads() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/scene.json");
    let scene = scene::load(path).unwrap();
    assert_eq!(scene.view.size(), (300, 150));
    assert_eq!(scene.world.objects().len(), 5);
    assert_eq!(scene.names[0], "floor");
    assert!(scene.world.light().is_some());
    assert_eq!(scene.names[2], "middle");
    assert!(scene.world.objects()[2].material().pattern.is_some());
}

#[test]
fn missing_scene_file_is_an_io_error() {
    let err = scene::load("/definitely/not/here.json");
    assert!(matches!(err, Err(spheres::Error::Io(_))));
}

#[test]
fn default_scene_ray_through_both_spheres() {
    let w = World::default_scene();
    let r = Ray::new(point(0.0, 0.0, -5.0), vector(0.0, 0.0, 1.0));
    let xs = w.intersect(&r);
    assert_eq!(xs.len(), 4);
    assert_eq!(xs[0].object, &w.objects()[0]);
    assert_eq!(xs[1].object, &w.objects()[1]);

    // light sits at the origin, inside the inner sphere: outer hit is ambient only
    let comps = prepare_computations(hit(&xs).unwrap(), &r);
    assert_eq!(w.shade_hit(&comps), Color::new(0.08, 0.1, 0.06));
}

#[test]
fn non_uniformly_scaled_sphere_keeps_normals_perpendicular() {
    let s = Sphere::new().with_transform(scaling(1.0, 0.5, 1.0)).unwrap();
    let r = Ray::new(point(0.0, 2.0, 0.0), vector(0.0, -1.0, 0.0));
    let xs = s.intersect(&r);
    assert_eq!(xs.len(), 2);
    assert_eq!(xs[0].t, 1.5);
    let n = s.normal_at(r.position(xs[0].t));
    assert_eq!(n, vector(0.0, 1.0, 0.0));
}

#[test]
fn sphere_casts_a_shadow_on_its_neighbour() {
    // light straight ahead of the viewer; the small front sphere blocks it from the big one
    let mut world = World::default();
    world.add_object(Sphere::new().with_transform(scaling(3.0, 3.0, 3.0)).unwrap());
    world.add_object(
        Sphere::new()
            .with_transform(&translation(0.0, 0.0, -5.0) * &scaling(0.5, 0.5, 0.5))
            .unwrap(),
    );
    world.set_light(PointLight::new(point(0.0, 0.0, -10.0), Color::white()));

    let blocked = Ray::new(point(0.0, 0.0, -20.0), vector(0.0, 0.0, 1.0));
    let xs = world.intersect(&blocked);
    let big = xs.iter().find(|i| i.object == &world.objects()[0]).unwrap();
    let comps = prepare_computations(big, &blocked);
    assert!(world.is_shadowed(comps.over_point));
    assert_eq!(world.shade_hit(&comps), Color::new(0.1, 0.1, 0.1));

    let open = Ray::new(point(0.0, 2.0, -20.0), vector(0.0, 0.0, 1.0));
    let lit = world.color_at(&open);
    assert!(lit.red > 0.1);
}
