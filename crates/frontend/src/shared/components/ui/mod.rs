pub mod button;
pub mod tabs;

pub use button::CtaButton;
pub use tabs::{Tabs, TabsContent, TabsList, TabsTrigger};
