// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use plotters::style::RGBColor;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

/// ColorBrewer "Set1", qualitative, 8 classes.
pub const SET1: &[RGBColor] = &[
    hexcolour!(0xE41A1C),
    hexcolour!(0x377EB8),
    hexcolour!(0x4DAF4A),
    hexcolour!(0x984EA3),
    hexcolour!(0xFF7F00),
    hexcolour!(0xFFFF33),
    hexcolour!(0xA65628),
    hexcolour!(0xF781BF),
];

// fraction of the distance to white
const LIGHTEN: f64 = 0.5;

pub fn colour(index: usize) -> RGBColor {
    SET1[index % SET1.len()]
}

/// Move a channel value in `[0, 1]` halfway towards 1.
pub fn lighten_channel(channel: f64) -> f64 {
    channel + (1.0 - channel) * LIGHTEN
}

pub fn lighten(colour: RGBColor) -> RGBColor {
    let channel = |c: u8| (lighten_channel(c as f64 / 255.0) * 255.0).round() as u8;
    RGBColor(channel(colour.0), channel(colour.1), channel(colour.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set1_decoding() {
        let red = SET1[0];
        assert_eq!((red.0, red.1, red.2), (0xE4, 0x1A, 0x1C));
        let pink = SET1[7];
        assert_eq!((pink.0, pink.1, pink.2), (0xF7, 0x81, 0xBF));
    }

    #[test]
    fn colour_wraps() {
        let a = colour(1);
        let b = colour(1 + SET1.len());
        assert_eq!((a.0, a.1, a.2), (b.0, b.1, b.2));
    }

    #[test]
    fn lighten_channel_is_between_value_and_one() {
        for i in 0..1000 {
            let c = i as f64 / 1000.0;
            let lighter = lighten_channel(c);
            assert!(lighter > c, "{} -> {}", c, lighter);
            assert!(lighter < 1.0, "{} -> {}", c, lighter);
        }
        assert_eq!(lighten_channel(0.0), 0.5);
        assert_eq!(lighten_channel(1.0), 1.0);
    }

    #[test]
    fn lighten_colour() {
        let black = lighten(RGBColor(0, 0, 0));
        assert_eq!((black.0, black.1, black.2), (128, 128, 128));
        let white = lighten(RGBColor(255, 255, 255));
        assert_eq!((white.0, white.1, white.2), (255, 255, 255));

        for colour in SET1 {
            let light = lighten(*colour);
            assert!(light.0 >= colour.0 && light.1 >= colour.1 && light.2 >= colour.2);
        }
    }
}
