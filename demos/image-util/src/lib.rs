use image::{Rgb, RgbImage};

pub fn save_rgb(
    prefix: &str,
    index: usize,
    rgb: &[u8],
    width: usize,
    height: usize,
) -> anyhow::Result<()> {
    assert_eq!(rgb.len(), width * height * 3);

    let mut img = RgbImage::new(width as u32, height as u32);

    for y in 0..height {
        for x in 0..width {
            let o = (y * width + x) * 3;
            img.put_pixel(x as u32, y as u32, Rgb([rgb[o], rgb[o + 1], rgb[o + 2]]));
        }
    }

    std::fs::create_dir_all("out")?;
    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}
