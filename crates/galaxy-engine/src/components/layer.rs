/// Compositing layer. The scene is painted strictly in `Layer::ORDER`,
/// back to front; there is no depth buffer.
///
/// The greeting ring is split around the sun: greetings on the far half of
/// their orbit are painted before the sun, the near half after it, which is
/// what makes the sun appear to occlude half the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Layer {
    DeepSpace = 0,
    ShootingStar = 1,
    Dust = 2,
    Ambient = 3,
    SectorPins = 4,
    GreetingsBehind = 5,
    Sun = 6,
    GreetingsFront = 7,
}

impl Layer {
    pub const COUNT: usize = 8;

    pub const ORDER: [Layer; Self::COUNT] = [
        Layer::DeepSpace,
        Layer::ShootingStar,
        Layer::Dust,
        Layer::Ambient,
        Layer::SectorPins,
        Layer::GreetingsBehind,
        Layer::Sun,
        Layer::GreetingsFront,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_is_back_to_front() {
        for pair in Layer::ORDER.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should precede {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sun_sits_between_greeting_halves() {
        assert!(Layer::GreetingsBehind < Layer::Sun);
        assert!(Layer::Sun < Layer::GreetingsFront);
    }
}
