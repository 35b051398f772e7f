use ics::components::Parameter;
use ics::properties::{Categories, Description, DtEnd, DtStart, Location, Summary};

use crate::Event;

/// Builds a calendar with one all-day entry per event.
pub fn to_ics<'a, I>(name: &'a str, events: I) -> ics::ICalendar<'a>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut icalendar = ics::ICalendar::new("2.0", name);

    for event in events {
        icalendar.add_event(event.to_ics());
    }

    icalendar
}

impl Event {
    #[must_use]
    pub fn to_ics(&self) -> ics::Event<'_> {
        let start = self.date.format("%Y%m%d").to_string();
        // DTEND of an all-day entry is exclusive.
        let end = self
            .date
            .succ_opt()
            .unwrap_or(self.date)
            .format("%Y%m%d")
            .to_string();

        let mut ics_event = ics::Event::new(self.id.to_string(), format!("{start}T000000Z"));

        let mut dtstart = DtStart::new(start);
        dtstart.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtstart);

        let mut dtend = DtEnd::new(end);
        dtend.add(Parameter::new("VALUE", "DATE"));
        ics_event.push(dtend);

        ics_event.push(Summary::new(&self.title));
        ics_event.push(Location::new(&self.location));
        ics_event.push(Description::new(&self.description));
        ics_event.push(Categories::new(<&'static str>::from(self.category)));

        ics_event
    }
}
