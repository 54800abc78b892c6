use glib::MainContext;
use once_cell::sync::Lazy;
use tokio::sync::watch;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

pub fn spawn_async<F>(fut: F)
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    RUNTIME.spawn(fut);
}

pub fn glib_channel<T: Send + 'static>() -> (glib::Sender<T>, glib::Receiver<T>) {
    MainContext::channel(glib::Priority::default())
}

/// Replays the current value and every later change of `rx` on the main loop.
pub fn watch_to_main<T>(mut rx: watch::Receiver<T>) -> glib::Receiver<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (tx, main_rx) = glib_channel::<T>();
    let _ = tx.send(rx.borrow_and_update().clone());
    spawn_async(async move {
        while rx.changed().await.is_ok() {
            let value = rx.borrow_and_update().clone();
            if tx.send(value).is_err() {
                break;
            }
        }
    });
    main_rx
}
