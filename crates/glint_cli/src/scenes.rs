//! Built-in demo scenes.

use std::sync::Arc;

use clap::ValueEnum;
use glint_renderer::{
    AxisAlignedRect, Camera, CheckerTexture, Color, DefaultCamera, Dielectric, DiffuseLight,
    HittableList, Lambertian, Material, Metal, NoiseTexture, PerspectiveCamera, Sphere, Texture,
    Vec3,
};

/// Names of the scenes the binary can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneName {
    /// Diffuse, glass and metal spheres on a large ground sphere
    ThreeSpheres,
    /// Metal spheres lit only by an emissive sphere and rectangle
    AreaLight,
    /// Checker and Perlin noise textures under a sky
    Textures,
}

/// Everything needed to render one of the demo scenes.
pub struct Scene {
    pub world: HittableList,
    pub camera: Box<dyn Camera>,
    pub aspect_ratio: f32,
    pub background: Color,
}

impl SceneName {
    /// Build the scene. `seed` drives procedural textures.
    pub fn build(self, seed: u64) -> Scene {
        match self {
            SceneName::ThreeSpheres => three_spheres(),
            SceneName::AreaLight => area_light(),
            SceneName::Textures => textures(seed),
        }
    }
}

fn material(m: impl Into<Material>) -> Arc<Material> {
    Arc::new(m.into())
}

fn three_spheres() -> Scene {
    let ground = material(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center = material(Lambertian::new(Color::new(0.7, 0.3, 0.3)));
    let left = material(Dielectric::new(1.5));
    let right = material(Metal::polished(Color::new(0.8, 0.6, 0.2)));

    let mut world = HittableList::new();
    world.add(Sphere::new(Vec3::new(0.0, -100.5, -1.5), 100.0, ground));
    world.add(Sphere::new(Vec3::new(0.8, 0.8, -3.0), 1.0, center));
    world.add(Sphere::new(Vec3::new(-2.0, 0.0, -1.5), 0.5, left));
    world.add(Sphere::new(Vec3::new(2.0, 0.0, -1.5), 0.5, right));

    Scene {
        world,
        camera: Box::new(DefaultCamera::default()),
        aspect_ratio: DefaultCamera::ASPECT_RATIO,
        background: Color::ZERO,
    }
}

fn area_light() -> Scene {
    let aspect_ratio = 16.0 / 9.0;
    let light = material(DiffuseLight::new(Color::splat(4.0)));

    let mut world = HittableList::new();
    world.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        material(Lambertian::new(Color::new(0.5, 0.3, 0.9))),
    ));
    world.add(Sphere::new(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        material(Metal::polished(Color::new(0.0, 0.2, 0.9))),
    ));
    world.add(Sphere::new(
        Vec3::new(7.0, 2.0, 5.0),
        2.0,
        material(Metal::polished(Color::new(0.8, 0.8, 0.2))),
    ));
    world.add(Sphere::new(Vec3::new(0.0, 7.0, 0.0), 2.0, light.clone()));
    world.add(AxisAlignedRect::xy(3.0, 5.0, 1.0, 3.0, -2.0, light));

    let camera = PerspectiveCamera::new(
        Vec3::new(26.0, 3.0, 6.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::Y,
        20.0,
        aspect_ratio,
        0.0,
        10.0,
    )
    .with_shutter(0.0, 1.0);

    Scene {
        world,
        camera: Box::new(camera),
        aspect_ratio,
        background: Color::ZERO,
    }
}

fn textures(seed: u64) -> Scene {
    let aspect_ratio = 16.0 / 9.0;
    let checker: Arc<Texture> = Arc::new(
        CheckerTexture::from_colors(Color::new(0.2, 0.3, 0.1), Color::splat(0.9)).into(),
    );
    let marble: Arc<Texture> = Arc::new(NoiseTexture::with_seed(4.0, seed).into());

    let mut world = HittableList::new();
    world.add(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        material(Lambertian::with_texture(checker)),
    ));
    world.add(Sphere::new(
        Vec3::new(0.0, 2.0, 0.0),
        2.0,
        material(Lambertian::with_texture(marble)),
    ));

    let camera = PerspectiveCamera::new(
        Vec3::new(13.0, 2.0, 3.0),
        Vec3::ZERO,
        Vec3::Y,
        20.0,
        aspect_ratio,
        0.0,
        10.0,
    );

    Scene {
        world,
        camera: Box::new(camera),
        aspect_ratio,
        background: Color::new(0.70, 0.80, 1.00),
    }
}
