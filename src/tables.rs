use std::sync::Mutex;

use crate::addr::LinkAddress;
use crate::link::Link;
use crate::monitor::Event;
use crate::route::Route;

/// In-memory mirror of the kernel's link/address/route inventory, fed by
/// an initial dump and kept live by applied notifications. Every query
/// returns copies; no reference escapes the lock.
#[derive(Default)]
pub struct NetTables {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    links: Vec<Link>,
    addrs: Vec<LinkAddress>,
    routes: Vec<Route>,
}

impl NetTables {
    pub fn upsert_link(&self, link: Link) {
        let mut t = self.inner.lock().unwrap();
        t.links.retain(|l| l.index != link.index);
        t.links.push(link);
    }

    /// Removing a link cascades to its routes. Addresses keyed to the
    /// dead index are retained; they age out when the kernel re-announces.
    pub fn remove_link(&self, index: u32) {
        let mut t = self.inner.lock().unwrap();
        t.links.retain(|l| l.index != index);
        t.routes.retain(|r| r.link_index != index);
    }

    pub fn upsert_addr(&self, addr: LinkAddress) {
        let mut t = self.inner.lock().unwrap();
        t.addrs
            .retain(|a| !(a.link_index == addr.link_index && a.address == addr.address));
        t.addrs.push(addr);
    }

    pub fn remove_addr(&self, addr: &LinkAddress) {
        let mut t = self.inner.lock().unwrap();
        t.addrs
            .retain(|a| !(a.link_index == addr.link_index && a.address == addr.address));
    }

    pub fn upsert_route(&self, route: Route) {
        let mut t = self.inner.lock().unwrap();
        t.routes.retain(|r| r != &route);
        t.routes.push(route);
    }

    pub fn remove_route(&self, route: &Route) {
        let mut t = self.inner.lock().unwrap();
        t.routes.retain(|r| r != route);
    }

    pub fn find_links<P: Fn(&Link) -> bool>(&self, pred: P) -> Vec<Link> {
        let t = self.inner.lock().unwrap();
        t.links.iter().filter(|l| pred(l)).cloned().collect()
    }

    pub fn find_addrs<P: Fn(&LinkAddress) -> bool>(&self, pred: P) -> Vec<LinkAddress> {
        let t = self.inner.lock().unwrap();
        t.addrs.iter().filter(|a| pred(a)).cloned().collect()
    }

    pub fn find_routes<P: Fn(&Route) -> bool>(&self, pred: P) -> Vec<Route> {
        let t = self.inner.lock().unwrap();
        t.routes.iter().filter(|r| pred(r)).cloned().collect()
    }

    pub fn apply(&self, event: Event) {
        match event {
            Event::NewLink(link) => self.upsert_link(link),
            Event::DelLink(index) => self.remove_link(index),
            Event::NewAddr(addr) => self.upsert_addr(addr),
            Event::DelAddr(addr) => self.remove_addr(&addr),
            Event::NewRoute(route) => self.upsert_route(route),
            Event::DelRoute(route) => self.remove_route(&route),
        }
    }
}
