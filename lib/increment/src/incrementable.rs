/// Produces the next device position in some policy-defined sequence.
pub trait Incrementable {
    fn next(&mut self) -> u32;
}

impl<I: Incrementable + ?Sized> Incrementable for Box<I> {
    fn next(&mut self) -> u32 {
        (**self).next()
    }
}

impl std::fmt::Debug for dyn Incrementable + Send {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Incrementable")
    }
}
